pub(crate) mod command;
pub(crate) mod lexer;
pub(crate) mod parser;
pub(crate) mod svg;
