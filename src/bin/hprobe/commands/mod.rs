mod hbond;
mod plot;
mod rmse;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Hbond(args) => hbond::run(args, ctx),
        Command::Rmse(args) => rmse::run(args, ctx),
        Command::Plot(args) => plot::run(args, ctx),
    }
}
