use super::args::*;

pub mod inspect;
pub mod pack;
pub mod unpack;
pub mod validate;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Pack(args) => pack::run(args),
        Command::Validate(args) => validate::run(args),
        Command::Inspect(args) => inspect::run(args),
        Command::Unpack(args) => unpack::run(args),
    }
}
