pub mod check;
pub mod deploy;
pub mod plan;
pub mod url;
