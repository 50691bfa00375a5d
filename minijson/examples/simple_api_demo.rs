// Example demonstrating the parse entry points

use minijson::{JsonType, JsonValue, ParseError, SliceParser};

fn main() -> Result<(), ParseError> {
    let documents = ["null", " true ", "false", "-12.5e-1", "01", "1e400", "nul", "   "];

    for json in documents {
        let mut value = JsonValue::default();
        match minijson::parse(&mut value, json) {
            Ok(()) => match value.get_type() {
                JsonType::Number => println!("{:?} -> number {}", json, value.get_number()),
                other => println!("{:?} -> {}", json, other),
            },
            Err(e) => println!("{:?} -> error: {}", json, e),
        }
    }

    // The owned form returns the value directly
    let value = SliceParser::new("3.25").parse()?;
    println!();
    println!("SliceParser::parse() gave {}", value);
    Ok(())
}
