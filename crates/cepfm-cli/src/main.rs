//! CepFM — command-line frontend for the CepFM engine.
//!
//! This binary drives `cepfm-core` end to end: listings, category
//! search, duplicate scanning, and trash operations. The engine root is
//! the current working directory; `.trash/` and `Download/` live
//! directly under it.

use std::path::{Path, PathBuf};

use anyhow::bail;

use cepfm_core::{
    delete_many, ensure_app_dirs, find_duplicates, load_listing, move_to_trash,
    restore_from_trash, wasted_bytes, CancelToken, Category, Config, Entry, ListingTarget,
    LocalStore, TRASH_DIR,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };

    let config = load_config();
    let store = LocalStore::new();
    let root = std::env::current_dir()?;

    ensure_app_dirs(&store, &root).await?;

    match command.as_str() {
        "ls" => {
            let dir = rest
                .first()
                .map(|a| resolve(&root, a))
                .unwrap_or_else(|| root.clone());
            let entries = listing(&store, &root, ListingTarget::Directory(dir), &config).await?;
            print_entries(&entries);
        }
        "find" => {
            let Some(label) = rest.first() else {
                bail!("usage: cepfm find <image|video|audio|document|app|download|trash|other>");
            };
            let Some(category) = Category::parse(label) else {
                bail!("unknown category: {label}");
            };
            let entries = listing(&store, &root, ListingTarget::Category(category), &config).await?;
            print_entries(&entries);
        }
        "dups" => {
            let dir = rest
                .first()
                .map(|a| resolve(&root, a))
                .unwrap_or_else(|| root.clone());
            let matches = find_duplicates(&store, &dir).await?;
            if matches.is_empty() {
                println!("No duplicates found.");
            } else {
                for m in &matches {
                    println!(
                        "{}  ({})  duplicate of {}",
                        m.duplicate.name(),
                        format_size(m.duplicate.size()),
                        m.original.name()
                    );
                }
                println!(
                    "{} duplicate(s), {} reclaimable",
                    matches.len(),
                    format_size(wasted_bytes(&matches))
                );
            }
        }
        "trash" => {
            let Some(arg) = rest.first() else {
                bail!("usage: cepfm trash <path>");
            };
            let path = resolve(&root, arg);
            let entry = entry_at(&store, &path).await?;
            let dest = move_to_trash(&store, &root, &entry).await?;
            println!("Moved to trash: {}", dest.display());
            // The old listing is stale now; show the refreshed one.
            let parent = path.parent().unwrap_or(&root).to_path_buf();
            let entries = listing(&store, &root, ListingTarget::Directory(parent), &config).await?;
            print_entries(&entries);
        }
        "restore" => {
            let Some(name) = rest.first() else {
                bail!("usage: cepfm restore <name>");
            };
            let path = root.join(TRASH_DIR).join(name);
            let entry = entry_at(&store, &path).await?;
            let dest = restore_from_trash(&store, &root, &entry).await?;
            println!("Restored: {}", dest.display());
        }
        "rm" => {
            if rest.is_empty() {
                bail!("usage: cepfm rm <path>...");
            }
            let paths: Vec<PathBuf> = rest.iter().map(|a| resolve(&root, a)).collect();
            let outcome = delete_many(&store, &paths).await;
            println!("Deleted {} item(s)", outcome.succeeded.len());
            for (path, error) in &outcome.failed {
                eprintln!("failed: {} ({error})", path.display());
            }
            if !outcome.all_succeeded() {
                std::process::exit(1);
            }
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }

    Ok(())
}

async fn listing(
    store: &LocalStore,
    root: &Path,
    target: ListingTarget,
    config: &Config,
) -> anyhow::Result<Vec<Entry>> {
    let (field, direction) = config.sort_options();
    let entries = load_listing(
        store,
        root,
        &target,
        field,
        direction,
        config.general.show_hidden,
        &config.scan_limits(),
        &CancelToken::new(),
    )
    .await?;
    Ok(entries)
}

async fn entry_at(store: &LocalStore, path: &Path) -> anyhow::Result<Entry> {
    use cepfm_core::FileStore;
    let stat = store.stat(path).await?;
    Ok(Entry::new(path.to_path_buf(), &stat))
}

/// Resolves a command-line path argument against the engine root.
fn resolve(root: &Path, arg: &str) -> PathBuf {
    let path = PathBuf::from(arg);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

fn load_config() -> Config {
    let cfg_dir = if Path::new("config").exists() {
        PathBuf::from("config")
    } else {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/"))
            .join(".config")
            .join("cepfm")
    };
    Config::load(&cfg_dir.join("default.toml")).unwrap_or_default()
}

fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("(empty)");
        return;
    }
    for entry in entries {
        if entry.is_dir() {
            println!("{:>10}  {}/", "dir", entry.name());
        } else {
            println!("{:>10}  {}", format_size(entry.size()), entry.name());
        }
    }
}

/// Formats a byte count for display, e.g. `1.5 MB`.
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let exp = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exp as i32);
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[exp])
}

fn print_usage() {
    println!("CepFM — pocket file manager");
    println!();
    println!("Usage: cepfm <command> [args]");
    println!();
    println!("Commands:");
    println!("  ls [path]         List a directory (default: current directory)");
    println!("  find <category>   List all files of a category under the root");
    println!("  dups [dir]        Report size+extension duplicates in a directory");
    println!("  trash <path>      Move an entry to the trash");
    println!("  restore <name>    Move an entry out of the trash, back to the root");
    println!("  rm <path>...      Permanently delete entries (best effort)");
}
