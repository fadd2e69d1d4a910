use anyhow::{bail, Result};

use crate::cli::OpenArgs;

/// Fixed logical-name → URL table, matching the links on the hosted
/// portfolio site.
pub const LINKS: [(&str, &str); 3] = [
    ("blog", "https://blog.adarshd.dev"),
    ("gallery", "https://adarshd.dev/gallery.html"),
    ("source", "https://github.com/adarshdigievo/Portfolio-REPL/"),
];

pub fn print_table() {
    for (name, url) in LINKS {
        println!("{:<8}  {}", name, url);
    }
}

pub fn run_open(args: OpenArgs) -> Result<()> {
    open_target(&args.target)
}

pub fn open_target(target: &str) -> Result<()> {
    let wanted = target.to_ascii_lowercase();
    let Some((_, url)) = LINKS.iter().find(|(name, _)| *name == wanted) else {
        bail!("undefined link {:?} (try blog, gallery or source)", target);
    };
    open::that(url)?;
    println!("Opened {} in the browser.", url);
    Ok(())
}
