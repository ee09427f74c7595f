pub mod extract;
pub mod orgs;
pub mod parse;
