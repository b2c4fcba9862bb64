use anyhow::Result;
use launchpad_core::model::Classification;
use launchpad_core::ClassificationTable;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClassifiedName {
    pub file: String,
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: u8,
    pub tier: &'static str,
    pub tier_index: u8,
    pub ignored: bool,
}

/// Classify bare file names against the built-in table.
pub fn classify_names(names: &[String]) -> Vec<ClassifiedName> {
    let table = ClassificationTable::builtin();
    names
        .iter()
        .map(|file| {
            let Classification { descriptor, tier } = table.classify(file);
            ClassifiedName {
                file: file.clone(),
                name: descriptor.name,
                glyph: descriptor.glyph,
                color: descriptor.color,
                tier: tier.as_str(),
                tier_index: tier.index(),
                ignored: table.is_ignored(descriptor.name),
            }
        })
        .collect()
}

/// Show how each file name is classified.
pub fn classify_command(names: &[String], json: bool) -> Result<()> {
    let results = classify_names(names);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for r in results {
        let ignored = if r.ignored { " (ignored)" } else { "" };
        println!(
            "{}: {} {} [color {}] tier={} ({}){}",
            r.file, r.glyph, r.name, r.color, r.tier, r.tier_index, ignored
        );
    }
    Ok(())
}
