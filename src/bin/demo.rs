//! Interactive demo over the sample song catalog.
//!
//! All I/O lives here; the library core stays pure. Run with
//! `RUST_LOG=info cargo run --bin demo` to see the engine's logging.

use std::io::{self, BufRead, Write};

use rateseek::{Engine, RatingsMatrix, ScoredItem, DEFAULT_TOP_N};

const BAR_WIDTH: usize = 40;

fn sample_engine() -> rateseek::Result<Engine> {
    let labels: Vec<String> = [
        "Blinding Lights - The Weeknd",
        "Shape of You - Ed Sheeran",
        "Someone You Loved - Lewis Capaldi",
        "Levitating - Dua Lipa",
        "Bad Habits - Ed Sheeran",
        "Stay - The Kid LAROI & Justin Bieber",
        "Peaches - Justin Bieber",
        "As It Was - Harry Styles",
        "Senorita - Shawn Mendes & Camila Cabello",
        "Watermelon Sugar - Harry Styles",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    // 6 raters x 10 songs
    let matrix = RatingsMatrix::from_rows(vec![
        vec![5.0, 4.0, 3.0, 5.0, 4.0, 5.0, 2.0, 3.0, 4.0, 4.0],
        vec![4.0, 5.0, 4.0, 4.0, 5.0, 5.0, 3.0, 3.0, 4.0, 3.0],
        vec![1.0, 2.0, 5.0, 1.0, 1.0, 2.0, 5.0, 4.0, 2.0, 2.0],
        vec![5.0, 5.0, 3.0, 4.0, 5.0, 5.0, 4.0, 3.0, 5.0, 4.0],
        vec![2.0, 1.0, 5.0, 1.0, 1.0, 2.0, 4.0, 5.0, 1.0, 2.0],
        vec![4.0, 4.0, 2.0, 5.0, 4.0, 4.0, 3.0, 2.0, 4.0, 3.0],
    ])?;

    Engine::new(matrix, labels)
}

fn render_bar_chart(ranking: &[ScoredItem]) {
    println!("\nSimilarity scores:");
    for item in ranking {
        let filled = (item.score.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize;
        println!(
            "  {:<45} {:<width$} {:.2}",
            item.label,
            "#".repeat(filled),
            item.score,
            width = BAR_WIDTH
        );
    }
}

fn main() {
    env_logger::init();

    let engine = match sample_engine() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to build sample catalog: {}", e);
            std::process::exit(1);
        }
    };

    println!("Available songs:");
    for (idx, label) in engine.labels().iter().enumerate() {
        println!("{:>2}. {}", idx + 1, label);
    }

    print!(
        "\nEnter the number of a song you like (1-{}): ",
        engine.item_count()
    );
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        eprintln!("Failed to read input.");
        std::process::exit(1);
    }

    let choice = match line.trim().parse::<usize>() {
        Ok(n) if n >= 1 => n - 1,
        _ => {
            println!("Invalid input. Please enter a number.");
            return;
        }
    };

    match engine.recommend(choice, DEFAULT_TOP_N) {
        Ok(ranking) => {
            let target = engine.label(choice).unwrap_or("?");
            println!("\nBecause you liked '{}', you might also like:", target);
            for item in &ranking {
                println!("- {} (similarity: {:.2})", item.label, item.score);
            }
            render_bar_chart(&ranking);
        }
        Err(e) => {
            // out-of-range choice lands here; user-facing, not a crash
            println!(
                "Invalid choice ({}). Please enter a number between 1 and {}.",
                e,
                engine.item_count()
            );
        }
    }
}
