//! The `quizdeck host` commands.
//!
//! Host mode only hides the editing commands from casual players; it is not
//! a security boundary.

use anyhow::Result;

use super::GlobalOpts;

pub fn unlock(opts: &GlobalOpts, code: String) -> Result<()> {
    let mut app = opts.open_app()?;
    let mut input = code;
    app.unlock_host(&mut input)?;
    println!("Host mode on.");
    Ok(())
}

pub fn lock(opts: &GlobalOpts) -> Result<()> {
    let mut app = opts.open_app()?;
    app.lock_host()?;
    println!("Host mode off.");
    Ok(())
}

pub fn status(opts: &GlobalOpts) -> Result<()> {
    let app = opts.open_app()?;
    if app.is_host() {
        println!("Host mode: on");
    } else {
        println!("Host mode: off");
    }
    Ok(())
}
