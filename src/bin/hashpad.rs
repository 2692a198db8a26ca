use std::io::{self, BufRead, Write};

use hashpad::config::WorkflowConfig;
use hashpad::core::{DigestValue, MatchResult};
use hashpad::error::{DigestError, ErrorKind};
use hashpad::workflow::{DigestWorkflow, QUICK_SAMPLES};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  hash <text>                     SHA-256 of text
  salt <text>                     SHA-256 of text with a random salt
  store <password>                store a password digest
  confirm <password> <again>      store after confirmation
  verify <password>               compare against the stored digest
  stored                          show the stored digest
  quick [n]                       hash a preset sample
  help                            this text
  quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 日志输出到 stderr，避免与结果混在一起
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match std::env::var("HASHPAD_CONFIG") {
        Ok(path) => WorkflowConfig::from_path(&path)?,
        Err(_) => WorkflowConfig::default(),
    };
    tracing::debug!(?config, "hashpad starting");
    let workflow = DigestWorkflow::new(config)?;

    println!("🔐 SHA-256 hashpad ({} bits). Type `help` for commands.", DigestValue::BITS);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                for (i, sample) in QUICK_SAMPLES.iter().enumerate() {
                    println!("  quick {i}: {sample}");
                }
            }
            "hash" => report(workflow.compute_digest(rest).map(|d| d.to_string())),
            "salt" => report(
                workflow
                    .compute_salted(rest)
                    .map(|s| format!("salt:   {}\ndigest: {}", s.salt, s.digest)),
            ),
            "store" => report(
                workflow
                    .store_digest(rest)
                    .map(|d| format!("✅ stored {d}")),
            ),
            "confirm" => {
                let (password, confirmation) = rest.split_once(' ').unwrap_or((rest, ""));
                report(
                    workflow
                        .store_confirmed(password, confirmation)
                        .map(|d| format!("✅ stored {d}")),
                )
            }
            "verify" => report(workflow.verify_digest(rest).map(|r| match r {
                MatchResult::Match => "✅ password matched".to_string(),
                MatchResult::Mismatch => "❌ incorrect password".to_string(),
            })),
            "stored" => match workflow.stored_digest() {
                Some(digest) => println!("{digest}"),
                None => println!("no password stored yet"),
            },
            "quick" => {
                let index = match rest.trim() {
                    "" => Ok(0),
                    n => n.parse::<usize>().map_err(|_| {
                        DigestError::Validation(format!("not a sample number: {n}"))
                    }),
                };
                report(index.and_then(|i| workflow.quick_digest(i)).map(|(sample, d)| {
                    format!("{sample:?} -> {}", d.preview(20))
                }));
            }
            other => println!("unknown command `{other}`, type `help`"),
        }
    }

    Ok(())
}

fn report(result: Result<String, DigestError>) {
    match result {
        Ok(text) => println!("{text}"),
        Err(err) => match err.kind() {
            ErrorKind::Validation => println!("⚠️  {err}"),
            ErrorKind::Precondition => println!("ℹ️  please store a password first"),
            ErrorKind::PrimitiveFailure => println!("❌ error generating hash, please try again"),
            ErrorKind::Other => println!("❌ {err}"),
        },
    }
}
