use idlview::{
    format_type, generate, load_program_from_file, load_program_from_str, normalize, EntityKind,
    Program, SnippetTarget, TypeNode, ViewerError,
};

fn fixture(name: &str) -> Program {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    load_program_from_file(&path).unwrap()
}

fn formatted(ty: &[idlview::Field]) -> Vec<String> {
    ty.iter().map(|f| format_type(&f.ty)).collect()
}

#[test]
fn test_anchor_legacy_and_v030_agree_on_instructions() {
    let legacy = fixture("anchor_legacy.json");
    let modern = fixture("anchor_v030.json");

    let legacy_ix = &legacy.instructions[0];
    let modern_ix = &modern.instructions[0];

    assert_eq!(legacy_ix.args, modern_ix.args);
    assert_eq!(legacy_ix.accounts, modern_ix.accounts);
    assert_eq!(legacy_ix.docs, modern_ix.docs);
    assert_eq!(legacy_ix.discriminator, None);
    assert_eq!(modern_ix.discriminator.as_ref().map(Vec::len), Some(8));

    assert_eq!(legacy.metadata, modern.metadata);
    assert_eq!(formatted(&legacy_ix.args), vec!["u64", "Option<string>"]);
}

#[test]
fn test_anchor_legacy_sections() {
    let program = fixture("anchor_legacy.json");

    assert_eq!(program.accounts[0].name, "VaultState");
    assert_eq!(formatted(&program.accounts[0].fields), vec!["publicKey", "u64"]);
    assert_eq!(
        program.types[0].ty,
        TypeNode::Enum {
            variants: vec!["Basic".into(), "Gold".into()]
        }
    );
    assert_eq!(program.events[0].fields.len(), 2);
    assert_eq!(
        program.errors[0].message.as_deref(),
        Some("Not enough lamports")
    );
}

#[test]
fn test_codama_document_formats() {
    let program = fixture("codama.json");

    assert_eq!(program.metadata.name.as_deref(), Some("vault"));
    assert_eq!(program.accounts[0].docs, None);
    assert_eq!(
        formatted(&program.accounts[0].fields),
        vec!["PublicKey", "u64 (le)", "SizePrefixed<String (utf8)>"]
    );

    let deposit = &program.instructions[0];
    assert_eq!(formatted(&deposit.args), vec!["u64 (le)", "Option<String (utf8)>"]);
    assert!(deposit.accounts[2].is_optional);

    let types: Vec<(String, String)> = program
        .types
        .iter()
        .map(|t| (t.name.clone(), format_type(&t.ty)))
        .collect();
    assert_eq!(
        types,
        vec![
            ("tier".to_string(), "enum".to_string()),
            ("authorities".to_string(), "Array<PublicKey, 32>".to_string()),
            ("tierLink".to_string(), "tier".to_string()),
        ]
    );

    assert_eq!(formatted(&program.events[0].fields), vec!["PublicKey", "u64"]);
    assert_eq!(
        program.errors[0].docs,
        Some(vec!["Raised by deposit".to_string()])
    );
}

#[test]
fn test_envelope_and_bare_body_are_equal() {
    let path = format!("{}/tests/fixtures/codama.json", env!("CARGO_MANIFEST_DIR"));
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    let wrapped = normalize(&raw).unwrap();
    let bare = normalize(&raw["program"]).unwrap();
    assert_eq!(wrapped, bare);
}

#[test]
fn test_snippets_for_user_program() {
    let program = fixture("codama.json");

    for kind in [EntityKind::Account, EntityKind::Instruction, EntityKind::Event] {
        let name = program.names(kind)[0];
        let target = SnippetTarget::find(&program, kind, name).unwrap();
        let snippet = generate(target, &program);
        assert!(snippet.is_applicable());
        assert!(snippet.code().contains(name));
    }

    let deposit = SnippetTarget::find(&program, EntityKind::Instruction, "deposit").unwrap();
    let code = generate(deposit, &program);
    assert!(code.code().contains(".deposit(amount, memo)"));
    assert!(code.code().contains("systemProgram: systemProgramPubkey,"));
}

#[test]
fn test_snippets_refused_for_standard_program() {
    let program = fixture("token.json");
    let target = SnippetTarget::find(&program, EntityKind::Instruction, "transfer").unwrap();

    let snippet = generate(target, &program);
    assert!(!snippet.is_applicable());
    assert_eq!(snippet.code(), "");
}

#[test]
fn test_bad_input_reports_without_partial_program() {
    assert!(matches!(
        load_program_from_str("not json"),
        Err(ViewerError::ParseError(_))
    ));
    assert!(matches!(
        load_program_from_str(r#"{ "instructions": [{ "name": "ok" }, 7] }"#),
        Err(ViewerError::FormatError(msg)) if msg == "instruction #2: expected an object, found a number"
    ));
}

#[test]
fn test_json_dump_uses_canonical_names() {
    let program = fixture("anchor_legacy.json");
    let dump = serde_json::to_value(&program).unwrap();

    assert_eq!(dump["metadata"]["publicKey"], "Vau1tXdGh5fVQxLkCdmPa6Hk7kTa7Zp3jRZ8k2bYwVn");
    assert_eq!(dump["instructions"][0]["accounts"][0]["isWritable"], true);
    assert_eq!(dump["instructions"][0]["args"][1]["type"], serde_json::json!({ "kind": "optionTypeNode", "item": "string" }));
}
