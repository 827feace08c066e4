// Output formatting — terminal rendering of trend reports.

pub mod terminal;
