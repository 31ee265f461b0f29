use crate::transforms::StepKind;
use anyhow::Result;
use std::io::Write;

/// Write the transform catalogue, one step per line.
pub fn list_steps<W: Write>(mut writer: W) -> Result<()> {
    let width = StepKind::all()
        .iter()
        .map(|kind| kind.as_str().len())
        .max()
        .unwrap_or(0);

    for kind in StepKind::all() {
        writeln!(
            writer,
            "{:<width$}  {}",
            kind.as_str(),
            kind.description(),
            width = width
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_steps_names_every_step() {
        let mut buffer = Vec::new();
        list_steps(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text.lines().count(), StepKind::all().len());
        assert!(text.starts_with("half       x / 2 if x is even"));
        assert!(text.contains("negate"));
    }
}
