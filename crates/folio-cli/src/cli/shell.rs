use anyhow::Result;
use folio_client::PortfolioClient;
use folio_core::ProfileVars;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

type Vars = ProfileVars<PortfolioClient>;

pub async fn run(vars: &Vars) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!();
    println!("Portfolio REPL");
    println!();
    let names: Vec<&str> = Vars::names().collect();
    println!("☆ Pre-loaded variables: {}.", names.join(", "));
    println!("☆ Type a variable name (try ABOUT) to print it. 'help' lists commands.");
    println!();

    loop {
        match rl.readline("folio> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if line == "exit" || line == "quit" {
                    println!("Goodbye.");
                    break;
                }

                if line == "help" {
                    print_help();
                    continue;
                }

                if let Err(e) = dispatch(&line, vars).await {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(e) => {
                eprintln!("readline error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

async fn dispatch(line: &str, vars: &Vars) -> Result<()> {
    // A bare variable name runs the full cycle: staleness check, refresh if
    // needed, format. Fetch failures surface as this command's error and
    // leave any cached record in place.
    if let Some(value) = vars.resolve(line).await {
        println!("{}", value?);
        return Ok(());
    }

    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (Some("fields"), None) => {
            for name in Vars::names() {
                println!("{}", name);
            }
        }
        (Some("links"), None) => super::links::print_table(),
        (Some("open"), Some(target)) => super::links::open_target(target)?,
        (Some("status"), None) => print_status(vars).await,
        _ => println!("Unknown command {:?}. Type 'help' for commands.", line),
    }
    Ok(())
}

async fn print_status(vars: &Vars) {
    match vars.store().cached().await {
        Some(record) => println!(
            "Profile fetched at {} ({}s ago).",
            record.fetched_wall.format("%Y-%m-%d %H:%M:%S UTC"),
            record.age().as_secs()
        ),
        None => println!("No profile fetched yet. Access any variable to fetch one."),
    }
}

fn print_help() {
    println!("Type a variable name to print that section of the profile:");
    let names: Vec<&str> = Vars::names().collect();
    println!("  {}", names.join(", "));
    println!();
    println!("Commands:");
    println!("  fields         list the variables");
    println!("  links          list the external links");
    println!("  open <name>    open a link in the browser (blog, gallery, source)");
    println!("  status         age of the cached profile");
    println!("  exit / quit");
}
