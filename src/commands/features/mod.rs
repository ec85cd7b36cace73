pub(super) mod help;
pub(super) mod indicators;
pub(super) mod report;
