use std::fs::File;
use std::io;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use siraj::core::cache::SnapshotCache;
use siraj::core::config::{self, CliOverrides};
use siraj::core::reminders::{DHIKR_LIST, DhikrCounter, DhikrSequence};
use siraj::core::store::QuranStore;
use siraj::remote::{AladhanClient, AlQuranClient};
use siraj::screens;

#[derive(Parser)]
#[command(name = "siraj", about = "Quran text, prayer times and reminders")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Column width for wrapped text
    #[arg(long, default_value_t = screens::DEFAULT_WIDTH)]
    width: usize,
}

#[derive(Subcommand)]
enum Command {
    /// List all chapters (default)
    Chapters,
    /// Read one chapter
    Read { number: u32 },
    /// Search the loaded chapters
    Search { query: String },
    /// Today's prayer times
    Prayer {
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lon: Option<f64>,
        /// aladhan calculation method
        #[arg(long)]
        method: Option<u8>,
    },
    /// Dhikr, duas and reminders
    Reminders,
    /// Count dhikr: Enter taps, `r` resets, `q` quits
    Dhikr {
        /// Count one phrase from the reminders list (1-3) instead of the
        /// after-prayer sequence
        #[arg(long)]
        single: Option<usize>,
    },
    /// Download the short chapters with translation for offline reading
    Download {
        /// Translation edition, e.g. fr.hamidullah
        #[arg(long)]
        translation: Option<String>,
    },
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to siraj.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("siraj.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let command = args.command.unwrap_or(Command::Chapters);

    let cli = match &command {
        Command::Prayer { lat, lon, method } => CliOverrides {
            latitude: *lat,
            longitude: *lon,
            method: *method,
            ..Default::default()
        },
        Command::Download { translation } => CliOverrides {
            translation_edition: translation.clone(),
            ..Default::default()
        },
        _ => CliOverrides::default(),
    };

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("{e}; using defaults");
        log::warn!("{}", e);
        config::SirajConfig::default()
    });
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Siraj starting up, cache at {}", resolved.cache_path.display());

    let store = QuranStore::new(
        Arc::new(AlQuranClient::new(
            Some(resolved.quran_base_url.clone()),
            Some(resolved.edition.clone()),
        )),
        Arc::new(AladhanClient::new(Some(resolved.prayer_base_url.clone()))),
        resolved.store_settings(),
    );
    let cache = SnapshotCache::new(&resolved.cache_path, resolved.cache_min_bytes);
    store.restore(&cache);

    match command {
        Command::Chapters => {
            store.load_chapters().await;
            let state = store.snapshot();
            print!("{}", screens::home(&state));
            print!("{}", screens::chapter_list(&state.verses));
        }
        Command::Read { number } => {
            store.load_chapters().await;
            store.load_chapter_verses(number).await;
            let state = store.snapshot();
            if let Some(error) = &state.error {
                println!("{}", screens::error_banner(error));
            }
            match store.verse_by_id(number) {
                Some(record) => print!("{}", screens::reading(&record, args.width)),
                None => println!("Chapter {number} is not available."),
            }
        }
        Command::Search { query } => {
            store.load_chapters().await;
            store.search(&query);
            let state = store.snapshot();
            if let Some(error) = &state.error {
                println!("{}", screens::error_banner(error));
                store.clear_error();
            }
            print!("{}", screens::search_results(&state.search_results, &query));
        }
        Command::Prayer { .. } => {
            let Some(at) = resolved.location else {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "no location: pass --lat/--lon, set SIRAJ_LATITUDE/SIRAJ_LONGITUDE or [prayer] in config",
                ));
            };
            store.load_prayer_times(at).await;
            let state = store.snapshot();
            match (&state.prayer_times, &state.error) {
                (Some(times), _) => {
                    let now = chrono::Local::now().time();
                    print!("{}", screens::prayer_times(times, now));
                }
                (None, Some(error)) => println!("{}", screens::error_banner(error)),
                (None, None) => println!("No prayer times available."),
            }
        }
        Command::Reminders => {
            print!("{}", screens::reminders());
        }
        Command::Dhikr { single: Some(n) } => {
            let Some(dhikr) = n.checked_sub(1).and_then(|i| DHIKR_LIST.get(i)).copied() else {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("no dhikr {n}: choose 1 to {}", DHIKR_LIST.len()),
                ));
            };
            let mut counter = DhikrCounter::new(dhikr);
            print!("{}", screens::dhikr_counter(&counter));
            for tap in taps() {
                match tap {
                    Tap::One => counter.increment(),
                    Tap::Reset => counter.reset(),
                }
                print!("{}", screens::dhikr_counter(&counter));
            }
        }
        Command::Dhikr { single: None } => {
            let mut sequence = DhikrSequence::default();
            print!("{}", screens::dhikr_sequence(&sequence));
            for tap in taps() {
                match tap {
                    Tap::One => sequence.tap(),
                    Tap::Reset => sequence.reset(),
                }
                print!("{}", screens::dhikr_sequence(&sequence));
                if sequence.is_finished() {
                    break;
                }
            }
        }
        Command::Download { .. } => {
            let downloaded = store
                .download_essentials(&cache, |line| println!("{line}"))
                .await;
            match store.snapshot().error {
                Some(error) => println!("{}", screens::error_banner(&error)),
                None => println!(
                    "Saved {} chapters to {}",
                    downloaded.len(),
                    cache.path().display()
                ),
            }
        }
    }

    Ok(())
}

enum Tap {
    One,
    Reset,
}

/// Keyboard lines until `q` or end of input.
fn taps() -> impl Iterator<Item = Tap> {
    io::stdin()
        .lines()
        .map_while(Result::ok)
        .map_while(|line| match line.trim() {
            "q" => None,
            "r" => Some(Tap::Reset),
            _ => Some(Tap::One),
        })
}
