//! Scripted boundary driver.
//!
//! Stands in for the rendering layer: feeds field paths and raw values into
//! the orchestrator, reports the error map, and supplies the submission sink
//! (here: print the record as JSON, the way a transport would consume it).

use anketa_catalog::Catalog;
use anketa_core::FieldPath;
use anketa_form::{ProductForm, SubmissionRecord};

fn main() -> anyhow::Result<()> {
    anketa_observability::init();

    let sink = |record: &SubmissionRecord| match serde_json::to_string_pretty(record) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!(%err, "failed to encode submission record"),
    };
    let mut form = ProductForm::new(Catalog::standard(), Box::new(sink));

    // First pass: the code is one digit short, so submission must bounce.
    form.set_field(FieldPath::ProductName, "Стол")?;
    form.set_field(FieldPath::ProductCode, "42")?;
    form.set_field("characteristics[0].name".parse()?, "Цвет")?;
    form.set_field("characteristics[0].type".parse()?, "Красный")?;

    if let Err(errors) = form.submit() {
        for (path, violations) in errors.iter() {
            for violation in violations {
                tracing::warn!(field = %path, message = violation.message, "rejected");
            }
        }
    }

    // Fix the code, add a second characteristic, and show the dependent
    // suggestions re-derived from its name.
    form.set_field(FieldPath::ProductCode, "4219")?;
    let added = form.append();
    form.set_field("characteristics[1].name".parse()?, "Прочность")?;
    let suggestions: Vec<&str> = form
        .options_for_entry(added)
        .iter()
        .map(|choice| choice.value.as_str())
        .collect();
    tracing::info!(?suggestions, "type suggestions for the new entry");
    form.set_field("characteristics[1].type".parse()?, "Высокая")?;

    let record = form
        .submit()
        .map_err(|errors| anyhow::anyhow!("submission rejected: {} invalid fields", errors.len()))?;
    tracing::info!(code = %record.product_code, "submitted");

    Ok(())
}
