use super::model::ParsedDocument;

// ---------------------------------------------------------------------------
// Line markers
// ---------------------------------------------------------------------------

// Frequency calculations emit normal modes in blocks (typically three per
// block). Each block repeats the same labelled rows, so a plain substring
// match per line is all the recognition needed.
pub const FREQUENCY_MARKER: &str = "Frequencies --";
pub const IR_MARKER: &str = "IR Inten";
pub const RAMAN_MARKER: &str = "Raman Activ";
pub const ATOM_COUNT_MARKER: &str = "NAtoms=";

/// Leading label words on an intensity row (`IR Inten    --`), skipped
/// before value tokens start.
const LABEL_TOKEN_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Scan the full text of one output document and accumulate frequency and
/// intensity values in document order.
///
/// A single forward pass recognizes four disjoint line kinds by substring
/// marker; everything else is ignored. Values append in left-to-right
/// order, so the Nth frequency lines up with the Nth intensity from the
/// aligned marker rows. Malformed numeric tokens are skipped with a logged
/// diagnostic; extraction itself never fails. A document without any
/// markers yields an empty [`ParsedDocument`] and the caller decides how
/// to surface that.
pub fn extract(text: &str) -> ParsedDocument {
    let mut doc = ParsedDocument::default();

    for (lineno, line) in text.lines().enumerate() {
        if line.contains(FREQUENCY_MARKER) {
            // Values follow the marker itself; a marker line without any
            // numeric token appends nothing.
            if let Some((_, rest)) = line.split_once(FREQUENCY_MARKER) {
                push_floats(&mut doc.frequencies, rest.split_whitespace(), lineno);
            }
        } else if line.contains(IR_MARKER) {
            push_floats(
                &mut doc.ir_intensities,
                line.split_whitespace().skip(LABEL_TOKEN_COUNT),
                lineno,
            );
        } else if line.contains(RAMAN_MARKER) {
            doc.raman_present = true;
            push_floats(
                &mut doc.raman_intensities,
                line.split_whitespace().skip(LABEL_TOKEN_COUNT),
                lineno,
            );
        } else if line.contains(ATOM_COUNT_MARKER) {
            // Normally appears once near the top; last occurrence wins.
            if let Some(count) = parse_atom_count(line, lineno) {
                doc.atom_count = count;
            }
        }
    }

    doc
}

/// Parse each token as `f64`, appending successes and logging a skip
/// diagnostic for anything malformed.
fn push_floats<'a>(out: &mut Vec<f64>, tokens: impl Iterator<Item = &'a str>, lineno: usize) {
    for token in tokens {
        match token.parse::<f64>() {
            Ok(value) => out.push(value),
            Err(_) => log::warn!(
                "line {}: skipping malformed numeric token {:?}",
                lineno + 1,
                token
            ),
        }
    }
}

/// Atom count: first whitespace-separated token after the `=` delimiter.
fn parse_atom_count(line: &str, lineno: usize) -> Option<u32> {
    let (_, rest) = line.split_once('=')?;
    let token = rest.split_whitespace().next()?;
    match token.parse::<u32>() {
        Ok(count) => Some(count),
        Err(_) => {
            log::warn!("line {}: malformed atom count {:?}", lineno + 1, token);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn frequencies_and_ir_intensities() {
        let text = "\
 Frequencies --   100.0   200.0   300.0
 IR Inten    --    5.0    10.0    15.0
";
        let doc = extract(text);
        assert_eq!(doc.frequencies, vec![100.0, 200.0, 300.0]);
        assert_eq!(doc.ir_intensities, vec![5.0, 10.0, 15.0]);
        assert!(!doc.raman_present);
    }

    #[test]
    fn no_markers_yields_empty_document() {
        let doc = extract("SCF Done:  E(RB3LYP) =  -230.778\n Normal termination\n");
        assert!(!doc.has_data());
        assert!(doc.frequencies.is_empty());
        assert!(doc.raman().is_none());
    }

    #[test]
    fn raman_sets_presence_flag() {
        let text = "\
 Frequencies --   620.4   721.1   830.9
 IR Inten    --    0.1     99.3    0.0
 Raman Activ --    12.6     0.0    28.4
";
        let doc = extract(text);
        assert!(doc.raman_present);
        assert_eq!(doc.ir_intensities.len(), 3);
        assert_eq!(doc.raman_intensities.len(), 3);
    }

    #[test]
    fn atom_count_from_marker() {
        let doc = extract(" NAtoms=  25\n");
        assert_eq!(doc.atom_count, 25);
    }

    #[test]
    fn atom_count_with_trailing_fields_and_last_wins() {
        let text = "\
 NAtoms=    3 NActive=    3 NUniq=    2
 NAtoms=   12
";
        let doc = extract(text);
        assert_eq!(doc.atom_count, 12);
    }

    #[test]
    fn atom_count_absent_is_zero() {
        let doc = extract(" Frequencies --   100.0\n IR Inten    --   1.0\n");
        assert_eq!(doc.atom_count, 0);
    }

    #[test]
    fn values_accumulate_across_blocks_in_order() {
        let text = "\
 Frequencies --   101.0   202.0   303.0
 Red. masses --     1.2     2.3     3.4
 IR Inten    --     1.0     2.0     3.0
 Frequencies --   404.0   505.0   606.0
 Red. masses --     4.5     5.6     6.7
 IR Inten    --     4.0     5.0     6.0
";
        let doc = extract(text);
        assert_eq!(
            doc.frequencies,
            vec![101.0, 202.0, 303.0, 404.0, 505.0, 606.0]
        );
        assert_eq!(doc.ir_intensities, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(doc.frequencies.len(), doc.ir_intensities.len());
        assert!(doc.counts_consistent());
    }

    #[test]
    fn malformed_tokens_are_skipped() {
        let text = "\
 Frequencies --   100.0   oops   300.0
 IR Inten    --    5.0    10.0   15.O
";
        let doc = extract(text);
        assert_eq!(doc.frequencies, vec![100.0, 300.0]);
        assert_eq!(doc.ir_intensities, vec![5.0, 10.0]);
    }

    #[test]
    fn frequency_marker_without_values_is_ignored() {
        let doc = extract(" Frequencies --\n");
        assert!(doc.frequencies.is_empty());
    }

    #[test]
    fn imaginary_modes_parse_as_negative() {
        let doc = extract(" Frequencies --  -120.5   310.2\n");
        assert_eq!(doc.frequencies, vec![-120.5, 310.2]);
    }

    #[test]
    fn full_document_pairs_cleanly() {
        let text = "\
 Entering Gaussian System
 NAtoms=    3 NActive=    3
 ... geometry and SCF output ...
 Harmonic frequencies (cm**-1), IR intensities (KM/Mole), Raman scattering
                     1                      2                      3
                     A                      A                      A
 Frequencies --   1623.3436              3801.3847              3906.7655
 Red. masses --      1.0820                 1.0450                 1.0818
 Frc consts  --      1.6800                 8.8934                 9.7302
 IR Inten    --     70.3628                 6.7858                43.3125
 Raman Activ --      8.0096               100.5123                29.0677
";
        let doc = extract(text);
        assert_eq!(doc.atom_count, 3);
        assert_eq!(doc.frequencies.len(), 3);
        assert!(doc.counts_consistent());

        let ir = doc.ir();
        assert_eq!(ir.len(), 3);
        assert_eq!(ir.lines[0].frequency, 1623.3436);
        assert_eq!(ir.lines[0].intensity, 70.3628);

        let raman = doc.raman().expect("Raman block present");
        assert_eq!(raman.lines[2].intensity, 29.0677);
    }
}
