use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use treepath::{
    build_from_file, keyword_for_kind, BuildOptions, ClassificationMode, NodeKind, SyntaxNode,
    SyntaxTree, Trivia,
};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "treepath")]
#[command(about = "Index C# syntax trees and locate nodes by structural path", long_about = None)]
#[command(version)]
struct Cli {
    /// Fail on constructs missing from the classification tables instead of
    /// indexing them as 'unknown'
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the indexed tree of a source file
    Dump {
        /// C# source file
        file: PathBuf,

        /// Emit the tree as JSON
        #[arg(long)]
        json: bool,

        /// Include attached trivia runs
        #[arg(long)]
        trivia: bool,
    },

    /// Evaluate a structural query against a source file
    Find {
        /// C# source file
        file: PathBuf,

        /// Query, e.g. namespace/class[C]/field[1]
        query: String,

        /// Print every match of the last segment (default: first only)
        #[arg(short, long)]
        all: bool,

        /// Emit matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the derived address of every node in a source file
    Paths {
        /// C# source file
        file: PathBuf,

        /// Print name-preferring alternative paths instead of positional ones
        #[arg(long)]
        alt: bool,
    },

    /// Evaluate a query against every .cs file under a directory
    Scan {
        /// Directory to walk
        dir: PathBuf,

        /// Query, e.g. namespace/class/method
        query: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = BuildOptions {
        mode: if cli.strict {
            ClassificationMode::Strict
        } else {
            ClassificationMode::Lenient
        },
    };

    match cli.command {
        Commands::Dump { file, json, trivia } => cmd_dump(&file, &options, json, trivia),
        Commands::Find {
            file,
            query,
            all,
            json,
        } => cmd_find(&file, &options, &query, all, json),
        Commands::Paths { file, alt } => cmd_paths(&file, &options, alt),
        Commands::Scan { dir, query } => cmd_scan(&dir, &options, &query),
    }
}

fn build(file: &Path, options: &BuildOptions) -> Result<SyntaxTree> {
    build_from_file(file, options).with_context(|| format!("failed to index {}", file.display()))
}

fn cmd_dump(file: &Path, options: &BuildOptions, json: bool, trivia: bool) -> Result<()> {
    let tree = build(file, options)?;

    if json {
        let snapshot: Vec<NodeSnapshot> = tree
            .root_nodes()
            .iter()
            .map(|n| NodeSnapshot::capture(&n, trivia))
            .collect();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    for root in tree.root_nodes().iter() {
        print_outline(&root, 0, trivia);
    }
    Ok(())
}

fn print_outline(node: &SyntaxNode<'_>, depth: usize, trivia: bool) {
    let indent = "  ".repeat(depth);
    let keyword = keyword_for_kind(node.kind());

    if trivia {
        for run in node.leading_trivia() {
            println!("{indent}{}", format_trivia(run).dimmed());
        }
    }

    let mut line = format!("{indent}{}", keyword.cyan());
    if !node.name().is_empty() {
        line.push_str(&format!("[{}]", node.name().yellow()));
    }
    line.push_str(&format!(
        " {}",
        format!("@{}..{}", node.start_offset(), node.end_offset()).dimmed()
    ));
    println!("{line}");

    for child in node.children().iter() {
        print_outline(&child, depth + 1, trivia);
    }

    if trivia {
        for run in node.trailing_trivia() {
            println!("{indent}{}", format_trivia(run).dimmed());
        }
    }
}

fn format_trivia(run: &Trivia) -> String {
    format!("~ {:?}: {}", run.kind, first_line(&run.text))
}

fn cmd_find(file: &Path, options: &BuildOptions, query: &str, all: bool, json: bool) -> Result<()> {
    let tree = build(file, options)?;
    let matches = tree
        .find_all(query)
        .with_context(|| format!("invalid query '{query}'"))?;

    if matches.is_empty() {
        if !json {
            println!("{}", "no match".yellow());
        } else {
            println!("[]");
        }
        return Ok(());
    }

    let shown = if all { matches.len() } else { 1 };

    if json {
        let found: Vec<MatchRecord> = matches
            .iter()
            .take(shown)
            .map(|n| MatchRecord::capture(&n))
            .collect();
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    for node in matches.iter().take(shown) {
        println!(
            "{} {}",
            node.full_path().green(),
            format!("@{}..{}", node.start_offset(), node.end_offset()).dimmed()
        );
        println!("  {} {}", "alt:".dimmed(), node.alternative_path());
        println!("  {}", first_line(node.source_text()));
    }
    if !all && matches.len() > 1 {
        println!(
            "{}",
            format!("({} more; use --all)", matches.len() - 1).dimmed()
        );
    }
    Ok(())
}

fn cmd_paths(file: &Path, options: &BuildOptions, alt: bool) -> Result<()> {
    let tree = build(file, options)?;
    for node in tree.iter_nodes() {
        let path = if alt {
            node.alternative_path()
        } else {
            node.full_path()
        };
        println!(
            "{path} {}",
            format!("@{}..{}", node.start_offset(), node.end_offset()).dimmed()
        );
    }
    Ok(())
}

fn cmd_scan(dir: &Path, options: &BuildOptions, query: &str) -> Result<()> {
    let mut total = 0usize;
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file()
            || entry.path().extension().and_then(|s| s.to_str()) != Some("cs")
        {
            continue;
        }

        let tree = match build_from_file(entry.path(), options) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("skipping {}: {e}", entry.path().display()).yellow()
                );
                continue;
            }
        };

        let matches = tree
            .find_all(query)
            .with_context(|| format!("invalid query '{query}'"))?;
        for node in matches.iter() {
            total += 1;
            println!(
                "{}: {}",
                entry.path().display().to_string().bold(),
                node.full_path().green()
            );
        }
    }
    println!("{}", format!("{total} match(es)").dimmed());
    Ok(())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// JSON form of one indexed node.
#[derive(Serialize)]
struct NodeSnapshot {
    kind: NodeKind,
    keyword: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    name: String,
    span: [usize; 2],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    leading_trivia: Vec<Trivia>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    trailing_trivia: Vec<Trivia>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    fn capture(node: &SyntaxNode<'_>, trivia: bool) -> Self {
        Self {
            kind: node.kind(),
            keyword: keyword_for_kind(node.kind()),
            name: node.name().to_string(),
            span: [node.start_offset(), node.end_offset()],
            leading_trivia: if trivia {
                node.leading_trivia().to_vec()
            } else {
                Vec::new()
            },
            trailing_trivia: if trivia {
                node.trailing_trivia().to_vec()
            } else {
                Vec::new()
            },
            children: node
                .children()
                .iter()
                .map(|c| NodeSnapshot::capture(&c, trivia))
                .collect(),
        }
    }
}

/// JSON form of one query match.
#[derive(Serialize)]
struct MatchRecord {
    path: String,
    alt_path: String,
    kind: NodeKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    name: String,
    span: [usize; 2],
}

impl MatchRecord {
    fn capture(node: &SyntaxNode<'_>) -> Self {
        Self {
            path: node.full_path(),
            alt_path: node.alternative_path(),
            kind: node.kind(),
            name: node.name().to_string(),
            span: [node.start_offset(), node.end_offset()],
        }
    }
}
