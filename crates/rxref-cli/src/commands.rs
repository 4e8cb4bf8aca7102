//! Command implementations: registry search and form classification.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use tracing::{info, info_span};

use rxref_core::{
    build_query, classify_form, find_matches, rows_for_reference, select_reference_options,
    Registry,
};
use rxref_ingest::load_registry;
use rxref_model::ReferenceOption;
use rxref_report::{build_report, write_report, QueryEcho};

use crate::cli::{ClassifyArgs, SearchArgs};
use crate::summary::{print_matches_preview, print_options, print_selected_rows};

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let span = info_span!("search", ingredient = %args.ingredient);
    let _guard = span.enter();

    let rows = load_registry(&args.registry)
        .with_context(|| format!("load registry: {}", args.registry.display()))?;
    let registry = Registry::classify(rows);
    info!(rows = registry.len(), "registry ready");

    let query = build_query(
        &args.ingredient,
        &args.routes,
        &args.base_form,
        &args.release_type,
        &args.dosage,
    );
    let matches = find_matches(&registry, &query);
    if matches.is_empty() {
        println!("No matches found.");
        println!("Hint: check the dosage and release type (e.g. \"conventional\" / \"prolonged\").");
        return Ok(());
    }

    println!("Matching rows: {}", matches.len());
    print_matches_preview(&matches, args.preview);

    let options = select_reference_options(&matches);
    print_options(&options);

    let chosen = match resolve_reference(&options, args.reference.as_deref())? {
        Selection::Chosen(name) => name,
        Selection::NeedsPrompt => {
            if io::stdin().is_terminal() {
                prompt_selection(&options)?
            } else {
                bail!("several reference options found; pass --reference to choose one");
            }
        }
    };

    let chosen_rows = rows_for_reference(&matches, &chosen);
    println!();
    println!("Selected reference: {chosen} ({} rows)", chosen_rows.len());
    print_selected_rows(&chosen_rows);

    if let Some(path) = &args.output {
        let report = build_report(
            &args.registry,
            QueryEcho {
                ingredient: args.ingredient.clone(),
                routes: args.routes.clone(),
                base_form: args.base_form.clone(),
                release_type: args.release_type.clone(),
                dosage: args.dosage.clone(),
            },
            &chosen,
            &chosen_rows,
            &options,
        );
        write_report(path, &report)?;
        println!("Report written: {}", path.display());
    }
    Ok(())
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let parsed = classify_form(&args.form_text);
    let base_form = if parsed.base_form.is_empty() {
        "-"
    } else {
        parsed.base_form.as_str()
    };
    let routes: Vec<String> = parsed.routes.iter().map(ToString::to_string).collect();
    println!("Base form:    {base_form}");
    println!("Release type: {}", parsed.release_type);
    if routes.is_empty() {
        println!("Routes:       undetermined");
    } else {
        println!("Routes:       {}", routes.join(", "));
    }
    Ok(())
}

enum Selection {
    Chosen(String),
    NeedsPrompt,
}

/// Settle the reference choice without touching the terminal: an explicit
/// `--reference` must name one of the options, a single option is chosen
/// outright, anything else needs a prompt.
fn resolve_reference(options: &[ReferenceOption], preselected: Option<&str>) -> Result<Selection> {
    if let Some(name) = preselected {
        if options
            .iter()
            .any(|option| option.reference_product == name)
        {
            return Ok(Selection::Chosen(name.to_string()));
        }
        bail!("reference {name:?} is not among the matched options");
    }
    if options.len() == 1 {
        return Ok(Selection::Chosen(options[0].reference_product.clone()));
    }
    Ok(Selection::NeedsPrompt)
}

fn prompt_selection(options: &[ReferenceOption]) -> Result<String> {
    let stdin = io::stdin();
    loop {
        print!("Enter the number of the reference product: ");
        io::stdout().flush().context("flush stdout")?;
        let mut answer = String::new();
        if stdin
            .lock()
            .read_line(&mut answer)
            .context("read selection")?
            == 0
        {
            bail!("input closed before a reference was chosen");
        }
        match answer.trim().parse::<usize>() {
            Ok(choice) if (1..=options.len()).contains(&choice) => {
                return Ok(options[choice - 1].reference_product.clone());
            }
            _ => println!("Enter a number between 1 and {}.", options.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str) -> ReferenceOption {
        ReferenceOption {
            reference_product: name.to_string(),
            rows_count: 1,
            sample_rows: Vec::new(),
        }
    }

    #[test]
    fn explicit_reference_must_be_among_options() {
        let options = vec![option("Alfadrug"), option("Betadrug")];
        assert!(matches!(
            resolve_reference(&options, Some("Alfadrug")),
            Ok(Selection::Chosen(name)) if name == "Alfadrug"
        ));
        assert!(resolve_reference(&options, Some("Gammadrug")).is_err());
    }

    #[test]
    fn single_option_is_chosen_without_prompting() {
        let options = vec![option("Alfadrug")];
        assert!(matches!(
            resolve_reference(&options, None),
            Ok(Selection::Chosen(name)) if name == "Alfadrug"
        ));
    }

    #[test]
    fn several_options_need_a_prompt() {
        let options = vec![option("Alfadrug"), option("Betadrug")];
        assert!(matches!(
            resolve_reference(&options, None),
            Ok(Selection::NeedsPrompt)
        ));
    }
}
