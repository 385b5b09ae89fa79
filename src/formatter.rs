use crate::{
    ast::Segment,
    environment::Environment,
    error::Result,
    evaluator::evaluate,
};

/// Renders the segments of one print statement into output lines. A `$`
/// segment closes the current line; lines left empty by leading, trailing or
/// repeated `$` markers are dropped.
pub fn render(segments: &[Segment], env: &Environment) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for segment in segments {
        match segment {
            Segment::Newline => lines.push(std::mem::take(&mut line)),
            Segment::Escape(ch) => line.push(*ch),
            Segment::Expression(expression) => {
                let value = evaluate(expression, env)?;
                line.push_str(&value.to_string());
            }
        }
    }
    lines.push(line);

    lines.retain(|line| !line.is_empty());

    Ok(lines)
}
