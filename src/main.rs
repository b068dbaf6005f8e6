use room_watch::args::{Args, Mode};
use room_watch::{
    CycleOutcome, DetectionContext, DisplayCapturer, RoomWatcher, TesseractRecognizer, WatchConfig,
};
use std::time::Duration;

fn main() {
    let Some(args) = Args::parse() else {
        return;
    };

    let default_filter = if args.debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = WatchConfig::default();
    if let Some(dir) = args.library_dir {
        config.library_dir = dir;
    }
    if let Some(index) = args.display_index {
        config.display_index = index;
    }

    println!("📚 Loading room library from {:?}...", config.library_dir);
    let context = match DetectionContext::load(config.clone()) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("❌ Failed to load room library: {e}");
            std::process::exit(1);
        }
    };

    match args.mode {
        Mode::Locate => print_regions(&context),
        Mode::Scan => {
            let watcher = build_watcher(context, &config);
            if !run_cycle(&watcher) {
                std::process::exit(1);
            }
        }
        Mode::Watch => {
            let watcher = build_watcher(context, &config);
            println!("👁️ Watching every {}s (Ctrl-C to stop)...", args.interval_secs);
            loop {
                run_cycle(&watcher);
                std::thread::sleep(Duration::from_secs(args.interval_secs));
            }
        }
    }
}

fn build_watcher(
    context: DetectionContext,
    config: &WatchConfig,
) -> RoomWatcher<DisplayCapturer, TesseractRecognizer> {
    RoomWatcher::new(
        context,
        DisplayCapturer::new(config.display_index),
        TesseractRecognizer::new(&config.ocr_lang),
    )
}

/// Run one detection cycle and print the outcome. Returns false when the
/// cycle aborted (capture failure or geometry mismatch); in watch mode the
/// caller simply retries on the next tick.
fn run_cycle(watcher: &RoomWatcher<DisplayCapturer, TesseractRecognizer>) -> bool {
    match watcher.process_frame() {
        Ok(outcome) => {
            print_outcome(&outcome);
            true
        }
        Err(e) => {
            eprintln!("❌ Cycle failed: {e}");
            false
        }
    }
}

fn print_outcome(outcome: &CycleOutcome) {
    match &outcome.room {
        None => println!("👻 No room detected"),
        Some(room) if outcome.anomalies.is_empty() => {
            println!("✅ {room}: no anomalies");
        }
        Some(room) => {
            println!("🚨 {room}: {} anomaly(ies)", outcome.anomalies.len());
            for record in &outcome.anomalies {
                let heatmap = record
                    .heatmap_path
                    .as_ref()
                    .map(|path| format!("{}", path.display()))
                    .unwrap_or_else(|| "(heatmap write failed)".to_string());
                println!(
                    "    {} - {} px changed - {}",
                    record.class_name, record.pixel_count, heatmap
                );
            }
        }
    }
}

fn print_regions(context: &DetectionContext) {
    for profile in context.profiles() {
        println!(
            "📍 {} ({} region(s)):",
            profile.name,
            profile.regions.len()
        );
        for baseline in &profile.regions {
            println!(
                "    {} at ({},{})-({},{}) score {:.3}",
                baseline.class_name,
                baseline.region.x0,
                baseline.region.y0,
                baseline.region.x1,
                baseline.region.y1,
                baseline.score
            );
        }
    }
}
