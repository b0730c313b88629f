use anyhow::Result;
use holonet::qa::{Translation, Translator};

/// Show how a question is translated, without touching the store
pub fn run(question: &str, json: bool) -> Result<()> {
    let translation = Translator::default().translate(question);

    if json {
        println!("{}", serde_json::to_string_pretty(&translation)?);
    } else {
        print!("{}", render(&translation)?);
    }
    Ok(())
}

fn render(translation: &Translation) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("Question: {}\n", translation.question));
    out.push_str(&format!(
        "Entity:   {}\n",
        translation.entity.as_deref().unwrap_or("-")
    ));
    match (translation.relation, translation.triple) {
        (Some(relation), Some(triple)) => out.push_str(&format!(
            "Relation: {:?} ({} -> {}.{})\n",
            relation, triple.edge, triple.target, triple.property
        )),
        _ => out.push_str("Relation: -\n"),
    }
    out.push_str(&format!("Intent:   {}\n", translation.intent));
    out.push_str("Cypher:\n");
    for line in translation.query.text().lines() {
        out.push_str(&format!("  {}\n", line));
    }
    if !translation.query.params().is_empty() {
        out.push_str("Parameters:\n");
        for (key, value) in translation.query.params() {
            out.push_str(&format!("  ${} = {}\n", key, serde_json::to_string(value)?));
        }
    }
    Ok(out)
}
