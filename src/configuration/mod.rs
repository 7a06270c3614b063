pub(crate) mod command_line;
pub(crate) mod constants;
