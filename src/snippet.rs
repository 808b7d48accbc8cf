//! Client snippet generation
//!
//! Produces Anchor TypeScript client boilerplate for a single account,
//! instruction or event. Snippets are plain string templates and are never
//! parsed or validated.

use log::{debug, warn};

use crate::error::{ViewerError, ViewerResult};
use crate::idl::{Account, EntityKind, Event, Instruction, Program};
use crate::known_programs::{self, KnownProgram};

/// Entity a snippet is generated for
#[derive(Debug, Clone, Copy)]
pub enum SnippetTarget<'a> {
    Account(&'a Account),
    Instruction(&'a Instruction),
    Event(&'a Event),
}

impl<'a> SnippetTarget<'a> {
    /// Look up an entity of `kind` by name (case-insensitive)
    pub fn find(program: &'a Program, kind: EntityKind, name: &str) -> ViewerResult<Self> {
        let found = match kind {
            EntityKind::Account => program.find_account(name).map(SnippetTarget::Account),
            EntityKind::Instruction => program.find_instruction(name).map(SnippetTarget::Instruction),
            EntityKind::Event => program.find_event(name).map(SnippetTarget::Event),
            EntityKind::Type | EntityKind::Error => {
                return Err(ViewerError::EntityNotFound {
                    kind: format!("{} snippet", kind),
                    name: name.to_string(),
                })
            }
        };

        found.ok_or_else(|| ViewerError::EntityNotFound {
            kind: kind.to_string(),
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &'a str {
        match *self {
            SnippetTarget::Account(account) => &account.name,
            SnippetTarget::Instruction(instruction) => &instruction.name,
            SnippetTarget::Event(event) => &event.name,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            SnippetTarget::Account(_) => EntityKind::Account,
            SnippetTarget::Instruction(_) => EntityKind::Instruction,
            SnippetTarget::Event(_) => EntityKind::Event,
        }
    }
}

/// Result of snippet generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snippet {
    Code(String),
    /// The program is a well-known shared program; no snippet is produced
    Inapplicable { program: &'static KnownProgram },
}

impl Snippet {
    /// Generated code, or `""` when generation was refused
    pub fn code(&self) -> &str {
        match self {
            Snippet::Code(code) => code,
            Snippet::Inapplicable { .. } => "",
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Snippet::Code(_))
    }
}

/// Generate a client snippet for `target` within `program`.
pub fn generate(target: SnippetTarget<'_>, program: &Program) -> Snippet {
    if let Some(known) = program
        .metadata
        .public_key
        .as_deref()
        .and_then(known_programs::lookup)
    {
        warn!(
            "not generating a {} snippet for `{}`: {} has its own client library",
            target.kind(),
            target.name(),
            known.name
        );
        return Snippet::Inapplicable { program: known };
    }

    debug!("generating {} snippet for `{}`", target.kind(), target.name());
    let code = match target {
        SnippetTarget::Account(account) => account_snippet(account),
        SnippetTarget::Instruction(instruction) => instruction_snippet(instruction),
        SnippetTarget::Event(event) => event_snippet(event),
    };
    Snippet::Code(code)
}

fn account_snippet(account: &Account) -> String {
    let name = &account.name;
    format!(
        "const {name}Account = await program.account.{name}.fetch({name}Pubkey);\n\
         console.log(\"{name}:\", {name}Account);\n"
    )
}

fn instruction_snippet(instruction: &Instruction) -> String {
    let args: Vec<&str> = instruction.args.iter().map(|a| a.name.as_str()).collect();

    let accounts = if instruction.accounts.is_empty() {
        "  .accounts({})\n".to_string()
    } else {
        let entries: String = instruction
            .accounts
            .iter()
            .map(|account| format!("    {0}: {0}Pubkey,\n", account.name))
            .collect();
        format!("  .accounts({{\n{}  }})\n", entries)
    };

    format!(
        "const tx = await program.methods\n  .{name}({args})\n{accounts}  .rpc();\n\
         console.log(\"{name} transaction:\", tx);\n",
        name = instruction.name,
        args = args.join(", "),
        accounts = accounts,
    )
}

fn event_snippet(event: &Event) -> String {
    let name = &event.name;
    format!(
        "const {name}Listener = program.addEventListener(\"{name}\", (event, slot) => {{\n\
         \x20 console.log(\"{name} at slot\", slot, event);\n\
         }});\n\
         // await program.removeEventListener({name}Listener);\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idl::{Field, InstructionAccount, ProgramMetadata, TypeNode};

    fn program_with_key(public_key: Option<&str>) -> Program {
        Program {
            metadata: ProgramMetadata {
                name: Some("escrow".into()),
                public_key: public_key.map(str::to_string),
                ..ProgramMetadata::default()
            },
            accounts: vec![Account {
                name: "EscrowState".into(),
                docs: None,
                discriminator: None,
                fields: vec![],
            }],
            instructions: vec![Instruction {
                name: "make".into(),
                docs: None,
                discriminator: None,
                accounts: vec![
                    InstructionAccount {
                        name: "maker".into(),
                        is_signer: true,
                        is_writable: true,
                        ..InstructionAccount::default()
                    },
                    InstructionAccount {
                        name: "escrow".into(),
                        is_writable: true,
                        ..InstructionAccount::default()
                    },
                ],
                args: vec![
                    Field {
                        name: "seed".into(),
                        ty: TypeNode::Primitive("u64".into()),
                        docs: None,
                    },
                    Field {
                        name: "receive".into(),
                        ty: TypeNode::Primitive("u64".into()),
                        docs: None,
                    },
                ],
            }],
            events: vec![Event {
                name: "EscrowMade".into(),
                docs: None,
                discriminator: None,
                fields: vec![],
            }],
            ..Program::default()
        }
    }

    #[test]
    fn test_account_snippet() {
        let program = program_with_key(None);
        let snippet = generate(SnippetTarget::Account(&program.accounts[0]), &program);
        let code = snippet.code();
        assert!(snippet.is_applicable());
        assert!(code.contains("program.account.EscrowState.fetch(EscrowStatePubkey)"));
    }

    #[test]
    fn test_instruction_snippet_lists_args_and_accounts_in_order() {
        let program = program_with_key(Some("Escrow1111111111111111111111111111111111111"));
        let snippet = generate(SnippetTarget::Instruction(&program.instructions[0]), &program);
        assert_eq!(
            snippet.code(),
            "const tx = await program.methods\n  .make(seed, receive)\n  .accounts({\n    maker: makerPubkey,\n    escrow: escrowPubkey,\n  })\n  .rpc();\nconsole.log(\"make transaction:\", tx);\n"
        );
    }

    #[test]
    fn test_instruction_snippet_without_accounts() {
        let instruction = Instruction {
            name: "ping".into(),
            docs: None,
            discriminator: None,
            accounts: vec![],
            args: vec![],
        };
        let program = Program::default();
        let code = generate(SnippetTarget::Instruction(&instruction), &program);
        assert!(code.code().contains(".ping()\n  .accounts({})"));
    }

    #[test]
    fn test_event_snippet_registers_named_listener() {
        let program = program_with_key(None);
        let snippet = generate(SnippetTarget::Event(&program.events[0]), &program);
        assert!(snippet
            .code()
            .starts_with("const EscrowMadeListener = program.addEventListener(\"EscrowMade\""));
    }

    #[test]
    fn test_known_program_is_refused() {
        let program = program_with_key(Some("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"));
        for target in [
            SnippetTarget::Account(&program.accounts[0]),
            SnippetTarget::Instruction(&program.instructions[0]),
            SnippetTarget::Event(&program.events[0]),
        ] {
            let snippet = generate(target, &program);
            assert!(!snippet.is_applicable());
            assert_eq!(snippet.code(), "");
            assert!(matches!(
                snippet,
                Snippet::Inapplicable { program } if program.name == "Token Program"
            ));
        }
    }

    #[test]
    fn test_find_target() {
        let program = program_with_key(None);
        let target = SnippetTarget::find(&program, EntityKind::Instruction, "MAKE").unwrap();
        assert_eq!(target.name(), "make");
        assert_eq!(target.kind(), EntityKind::Instruction);

        let missing = SnippetTarget::find(&program, EntityKind::Event, "Refunded").unwrap_err();
        assert_eq!(missing.to_string(), "Event 'Refunded' not found");

        let unsupported = SnippetTarget::find(&program, EntityKind::Type, "Anything").unwrap_err();
        assert!(matches!(unsupported, ViewerError::EntityNotFound { .. }));
    }
}
