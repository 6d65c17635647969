//! End-to-end scans of whole HP-GL/2 documents
use hpgl_input::parser::{scan_commands, CommandKind, Pair};
use hpgl_input::{parse_hpgl, ParseError, PenEvent, PenKind};

const MIXED_DOCUMENT: &str = "DT&\nPU12\nPD12,13\nLBa-label&\nDT_\nXY12,13,432,2 234\nLBa-label_\nPE a b # c;\nSM c\nPD14\nPU15,16 17 18;\n";

fn collect(document: &str) -> Result<Vec<(PenKind, Vec<Pair>)>, ParseError> {
    parse_hpgl(document)
        .map(|event| event.map(|e| (e.kind, e.pairs)))
        .collect()
}

#[test]
fn test_mixed_document() {
    assert_eq!(
        collect(MIXED_DOCUMENT).expect("parse mixed document"),
        vec![
            (PenKind::PenUp, vec![]),
            (PenKind::PenDown, vec![(12, 13)]),
            (PenKind::PenDown, vec![]),
            (PenKind::PenUp, vec![(15, 16), (17, 18)]),
        ]
    );
}

#[test]
fn test_indented_document() {
    let document = "
        DT&
        PU12
        PD12,13
        LBa-label&
        DT_
        XY12,13,432,2 234
        LBa-label_
        PE a b # c;
        SM c
        PD14
        PU15,16 17 18;
        ";
    assert_eq!(collect(document), collect(MIXED_DOCUMENT));
}

#[test]
fn test_skipped_commands_in_mixed_document() {
    let kinds: Vec<CommandKind> = scan_commands(MIXED_DOCUMENT)
        .map(|c| c.expect("command").kind)
        .collect();
    assert_eq!(
        kinds,
        [
            CommandKind::DefineLabelTerminator,
            CommandKind::PenUp,
            CommandKind::PenDown,
            CommandKind::Label,
            CommandKind::DefineLabelTerminator,
            CommandKind::Other,
            CommandKind::Label,
            CommandKind::PolylineEncoded,
            CommandKind::SymbolMode,
            CommandKind::PenDown,
            CommandKind::PenUp,
        ]
    );
}

#[test]
fn test_plotter_session() {
    let events = collect("IN; SP1; PU 10,10; PD 10, 30; PU 20, 30 PD 20, 10, 10, 10;").unwrap();
    assert_eq!(
        events,
        vec![
            (PenKind::PenUp, vec![(10, 10)]),
            (PenKind::PenDown, vec![(10, 30)]),
            (PenKind::PenUp, vec![(20, 30)]),
            (PenKind::PenDown, vec![(20, 10), (10, 10)]),
        ]
    );
}

#[test]
fn test_bad_file() {
    let result = collect("...");
    assert!(matches!(
        result,
        Err(ParseError::UnparsableAt { position: 0, .. })
    ));
}

#[test]
fn test_bad_start() {
    let result = collect("...PD0,0,10,10;");
    assert!(matches!(
        result,
        Err(ParseError::MisalignedMatch {
            position: 0,
            matched_at: 3,
            ..
        })
    ));
}

#[test]
fn test_empty_file() {
    assert_eq!(collect("  \n\t"), Err(ParseError::EmptyDocument));
    assert_eq!(collect(""), Err(ParseError::EmptyDocument));
}

#[test]
fn test_missing_final_semicolon() {
    let result = collect("\n        PU15,16 17 18\n        ");
    assert!(matches!(
        result,
        Err(ParseError::MissingFinalTerminator { position: 9, .. })
    ));
}

#[test]
fn test_events_before_error_are_delivered() {
    let mut events = parse_hpgl("PU15,16 17 18");
    assert_eq!(
        events.next(),
        Some(Ok(PenEvent::new(
            PenKind::PenUp,
            vec![(15, 16), (17, 18)]
        )))
    );
    assert!(matches!(
        events.next(),
        Some(Err(ParseError::MissingFinalTerminator { .. }))
    ));
    assert_eq!(events.next(), None);
}

#[test]
fn test_polyline_encoded_terminator() {
    assert!(collect("PE 123 #AB").is_err());
    assert_eq!(collect("PE 123 #AB;"), Ok(vec![]));
}

#[test]
fn test_label_terminator_mutability() {
    assert_eq!(
        collect("DT&;LBtext&PD1,1;"),
        Ok(vec![(PenKind::PenDown, vec![(1, 1)])])
    );
    assert_eq!(
        collect("DT_;LBtext_PD1,1;"),
        Ok(vec![(PenKind::PenDown, vec![(1, 1)])])
    );
    // ETX is no longer the terminator once DT has run
    assert!(collect("DT_;LBtext\u{3}PD1,1;").is_err());
}

#[test]
fn test_default_label_terminator() {
    assert_eq!(
        collect("LBhello, world\u{3};PU;"),
        Ok(vec![(PenKind::PenUp, vec![])])
    );
}

#[test]
fn test_trailing_separator_is_reported() {
    let result = collect("PU12,13,;");
    assert!(matches!(
        result,
        Err(ParseError::UnparsableAt { position: 0, .. })
    ));
}

#[test]
fn test_lowercase_mnemonics() {
    assert_eq!(
        collect("in;pu0,0;pd5,5;"),
        Ok(vec![
            (PenKind::PenUp, vec![(0, 0)]),
            (PenKind::PenDown, vec![(5, 5)]),
        ])
    );
    assert!(collect("Pu0,0;").is_err());
}

#[test]
fn test_fractional_parameters_truncate() {
    assert_eq!(
        collect("PD1.9,2.5;"),
        Ok(vec![(PenKind::PenDown, vec![(1, 2)])])
    );
}

#[test]
fn test_scans_are_independent() {
    let first = collect(MIXED_DOCUMENT);
    let second = collect(MIXED_DOCUMENT);
    assert_eq!(first, second);

    // A terminator defined in one scan does not leak into the next
    assert!(collect("DT&;LBx&;").is_ok());
    assert!(collect("LBx&;").is_err());
}

#[test]
fn test_partial_consumption() {
    let mut events = parse_hpgl(MIXED_DOCUMENT);
    assert_eq!(events.next(), Some(Ok(PenEvent::new(PenKind::PenUp, vec![]))));
    drop(events);
    assert_eq!(collect(MIXED_DOCUMENT).unwrap().len(), 4);
}
