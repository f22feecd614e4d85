// Emodex CLI Tool
// Command-line interface for emoji lookup and emoticon replacement

use clap::{Parser, Subcommand};
use emodex::{Category, EmojiProvider, EmojiRecord, LookupError};

/// Emodex - Emoji catalog lookup and emoticon replacement
#[derive(Parser, Debug)]
#[command(name = "emodex")]
#[command(about = "Look up emojis by tag or category and replace emoticons in text", long_about = None)]
#[command(version = "0.1.0")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Show detailed information
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace standalone emoticons in TEXT with emojis
    Replace {
        /// Input text to scan (e.g., "Hej :D")
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Look up the emoji for an exact tag
    Tag {
        /// Tag to look up (e.g., "happy-face")
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// List emojis for one or more categories
    Category {
        /// Category names (e.g., "smileysAndEmotion", "activity")
        #[arg(value_name = "CATEGORY", required = true)]
        categories: Vec<String>,
    },

    /// Fuzzy-search emojis by tag substring
    Search {
        /// Query matched case-insensitively against tags
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Dump the whole catalog
    List {
        /// Print emoji characters only
        #[arg(short, long)]
        emojis_only: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load provider
    if args.verbose {
        println!("🙂 Loading emoji provider...");
    }

    let provider = EmojiProvider::new()?;

    if args.verbose {
        let (records, categories) = provider.stats();
        println!(
            "✅ Catalog loaded: {} emojis in {} categories\n",
            records, categories
        );
    }

    match args.command {
        Command::Replace { text } => run_replace(&provider, &text),
        Command::Tag { tag } => run_tag(&provider, &tag)?,
        Command::Category { categories } => run_category(&provider, &categories)?,
        Command::Search { query, limit } => run_search(&provider, &query, limit),
        Command::List { emojis_only } => run_list(&provider, emojis_only),
    }

    if args.verbose {
        println!("\n─────────────────────────────────────────────────");
        println!("✨ Completed successfully!");
    }

    Ok(())
}

fn run_replace(provider: &EmojiProvider, text: &str) {
    println!("{}", provider.replace_emoticons(text));
}

fn run_tag(provider: &EmojiProvider, tag: &str) -> Result<(), LookupError> {
    let record = provider.record_by_tag(tag)?;
    println!("✅ {} → {}", tag, record.emoji);
    println!("   {}", format_record(record));

    Ok(())
}

fn run_category(
    provider: &EmojiProvider,
    names: &[String],
) -> Result<(), LookupError> {
    let categories = parse_categories(names)?;
    let records = provider.records_by_categories(&categories);

    if records.is_empty() {
        println!("❌ No emojis found.");
        return Ok(());
    }

    println!("✅ Found {} emojis:\n", records.len());
    for (idx, record) in records.iter().enumerate() {
        println!("{}. {}", idx + 1, format_record(record));
    }

    Ok(())
}

fn run_search(provider: &EmojiProvider, query: &str, limit: usize) {
    let matches = provider.matching_emojis(query);

    if matches.is_empty() {
        println!("❌ No matches found.");
        return;
    }

    println!("✅ Found {} matches:\n", matches.len());
    for (idx, emoji) in matches.iter().take(limit).enumerate() {
        println!("{}. {}", idx + 1, emoji);
    }
}

fn run_list(provider: &EmojiProvider, emojis_only: bool) {
    if emojis_only {
        println!("{}", provider.emojis().join(" "));
        return;
    }

    for (idx, record) in provider.records().iter().enumerate() {
        println!("{}. {}", idx + 1, format_record(record));
    }
}

/// Parse category names, failing on the first unknown one
fn parse_categories(names: &[String]) -> Result<Vec<Category>, LookupError> {
    names.iter().map(|name| name.parse()).collect()
}

/// Render one record as a single display line
fn format_record(record: &EmojiRecord) -> String {
    let mut line = format!("{:<3} → {}", record.emoji, record.tags.join(", "));

    let aliases = record.aliases();
    if !aliases.is_empty() {
        line.push_str(&format!("  [{}]", aliases.join(", ")));
    }
    line.push_str(&format!("  ({})", record.category));

    line
}
