use anyhow::{Result, bail};

use crate::Context;

/// Run `vagrant` with the given arguments inside the VVV directory.
pub fn run(ctx: &Context, args: &[String]) -> Result<()> {
    let backend = ctx.backend()?;
    log::debug!("vagrant {} in {}", args.join(" "), backend.vvv_dir().display());

    let status = backend.passthrough(args)?;
    if !status.success() {
        bail!(
            "vagrant exited with {}",
            status
                .code()
                .map_or_else(|| "a signal".to_string(), |c| c.to_string())
        );
    }
    Ok(())
}
