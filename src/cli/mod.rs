//! CLI subcommands — list, to-dl, to-grams, validate.

use crate::core::{catalog, convert, format, state};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known ingredients and their densities
    List {
        /// Path to a custom catalog JSON file (default: builtin table)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert grams of an ingredient to deciliters
    ToDl {
        /// Ingredient name (case-insensitive)
        #[arg(short, long)]
        ingredient: String,

        /// Weight in grams (negative input clamps to zero)
        #[arg(allow_negative_numbers = true)]
        grams: f64,

        /// Path to a custom catalog JSON file (default: builtin table)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Convert deciliters of an ingredient to grams
    ToGrams {
        /// Ingredient name (case-insensitive)
        #[arg(short, long)]
        ingredient: String,

        /// Volume in deciliters (negative input clamps to zero)
        #[arg(allow_negative_numbers = true)]
        deciliters: f64,

        /// Path to a custom catalog JSON file (default: builtin table)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a catalog file without converting anything
    Validate {
        /// Path to the catalog JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::List { catalog, json } => cmd_list(catalog.as_deref(), json),
        Commands::ToDl {
            ingredient,
            grams,
            catalog,
        } => cmd_to_dl(&ingredient, grams, catalog.as_deref()),
        Commands::ToGrams {
            ingredient,
            deciliters,
            catalog,
        } => cmd_to_grams(&ingredient, deciliters, catalog.as_deref()),
        Commands::Validate { file } => cmd_validate(&file),
    }
}

/// Load the builtin catalog, or parse and validate a user-supplied one.
fn load_catalog(path: Option<&Path>) -> Result<catalog::Catalog, String> {
    let Some(path) = path else {
        return Ok(catalog::Catalog::builtin().clone());
    };
    let cat = catalog::Catalog::from_file(path)?;
    let errors = catalog::validate_catalog(&cat);
    if errors.is_empty() {
        return Ok(cat);
    }
    for e in &errors {
        eprintln!("  ERROR: {}", e);
    }
    Err(format!(
        "{} validation error(s) in {}",
        errors.len(),
        path.display()
    ))
}

/// Look up an ingredient or fail with a hint.
fn find_ingredient<'a>(
    cat: &'a catalog::Catalog,
    name: &str,
) -> Result<&'a catalog::Ingredient, String> {
    cat.get(name)
        .ok_or_else(|| format!("unknown ingredient '{}' (see `gramdl list`)", name))
}

fn cmd_list(catalog_path: Option<&Path>, json: bool) -> Result<(), String> {
    let cat = load_catalog(catalog_path)?;

    if json {
        let out = serde_json::to_string_pretty(cat.ingredients())
            .map_err(|e| format!("serialize error: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    println!("{} ingredients:", cat.len());
    let width = cat
        .ingredients()
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(0);
    for ingredient in cat.ingredients() {
        println!(
            "  {:<width$}  {:>5} g/dl",
            ingredient.name,
            ingredient.grams_per_deciliter,
            width = width
        );
    }
    Ok(())
}

fn cmd_to_dl(name: &str, grams: f64, catalog_path: Option<&Path>) -> Result<(), String> {
    let cat = load_catalog(catalog_path)?;
    let ingredient = find_ingredient(&cat, name)?.clone();

    let mut session = state::ConversionState::new(&cat)?;
    session.select_ingredient(ingredient);
    session.update_gram_amount(grams);

    println!(
        "{} {} = {}",
        session.formatted_grams(),
        session.selected_ingredient().name,
        session.formatted_result()
    );
    Ok(())
}

fn cmd_to_grams(name: &str, deciliters: f64, catalog_path: Option<&Path>) -> Result<(), String> {
    let cat = load_catalog(catalog_path)?;
    let ingredient = find_ingredient(&cat, name)?;

    // Same clamping rule as gram input: negative volume reads as zero.
    let deciliters = deciliters.max(0.0);
    let grams = convert::deciliters_to_grams(deciliters, ingredient.grams_per_deciliter);

    println!(
        "{} {} = {}",
        format::format_deciliters(deciliters),
        ingredient.name,
        format::format_grams(grams)
    );
    Ok(())
}

fn cmd_validate(file: &Path) -> Result<(), String> {
    let cat = catalog::Catalog::from_file(file)?;
    let errors = catalog::validate_catalog(&cat);

    if errors.is_empty() {
        println!("OK: {} ({} ingredients)", file.display(), cat.len());
        Ok(())
    } else {
        for e in &errors {
            eprintln!("  ERROR: {}", e);
        }
        Err(format!("{} validation error(s)", errors.len()))
    }
}
