//! Pretty-print helpers for CLI output

use crate::format::{format_discriminator, format_type};
use crate::idl::{EntityKind, Field, Instruction, InstructionAccount, Program, TypeNode};
use crate::snippet::{Snippet, SnippetTarget};
use colored::Colorize;

/// Rendering switches shared by every section
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub show_docs: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { show_docs: true }
    }
}

/// Print a main header (program name, command title)
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().cyan());
    println!("{}", "─".repeat(50).dimmed());
}

/// Print a sub-header (section within output)
pub fn print_subheader(title: &str) {
    println!();
    println!("{}", title.bold().white());
}

/// Print a key-value pair
pub fn print_field(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a numbered list item
pub fn print_numbered_item(num: usize, text: &str) {
    println!("  {}. {}", format!("{:>2}", num).dimmed(), text);
}

fn print_none() {
    println!("  {}", "(none)".dimmed());
}

fn print_docs(docs: Option<&Vec<String>>, indent: usize, options: DisplayOptions) {
    if !options.show_docs {
        return;
    }
    if let Some(docs) = docs {
        let pad = " ".repeat(indent);
        for line in docs {
            println!("{}{}", pad, line.italic().dimmed());
        }
    }
}

/// Print `name : type` rows for a field list
fn print_fields(fields: &[Field], options: DisplayOptions) {
    if fields.is_empty() {
        print_none();
        return;
    }
    for (i, field) in fields.iter().enumerate() {
        println!(
            "  {}. {} : {}",
            format!("{:>2}", i + 1).dimmed(),
            field.name.yellow(),
            format_type(&field.ty).blue()
        );
        print_docs(field.docs.as_ref(), 6, options);
    }
}

/// Display program overview
pub fn display_program_overview(program: &Program) {
    print_header(&format!("Program: {}", program.display_name()));

    let meta = &program.metadata;
    if let Some(version) = &meta.version {
        print_field("Version", version);
    }
    if let Some(key) = &meta.public_key {
        print_field("Address", key);
    }
    if let Some(prefix) = &meta.prefix {
        print_field("Prefix", prefix);
    }

    print_subheader("Summary");
    println!(
        "  {} Accounts, {} Instructions, {} Types, {} Errors, {} Events",
        format!("{}", program.accounts.len()).yellow(),
        format!("{}", program.instructions.len()).green(),
        format!("{}", program.types.len()).blue(),
        format!("{}", program.errors.len()).red(),
        format!("{}", program.events.len()).magenta(),
    );
    println!();
}

/// Display every account with its fields
pub fn display_accounts(program: &Program, options: DisplayOptions) {
    print_header(&format!(
        "Accounts for {} ({} total)",
        program.display_name(),
        program.accounts.len()
    ));

    if program.accounts.is_empty() {
        print_none();
    }
    for account in &program.accounts {
        print_subheader(&account.name);
        print_docs(account.docs.as_ref(), 2, options);
        if let Some(discriminator) = &account.discriminator {
            print_field("Discriminator", &format_discriminator(discriminator));
        }
        print_fields(&account.fields, options);
    }
    println!();
}

/// Display list of all instructions
pub fn display_instructions_list(program: &Program) {
    print_header(&format!(
        "Instructions for {} ({} total)",
        program.display_name(),
        program.instructions.len()
    ));

    if program.instructions.is_empty() {
        print_none();
    } else {
        for (i, ix) in program.instructions.iter().enumerate() {
            print_numbered_item(i + 1, &ix.name.green().to_string());
        }
    }
    println!();
}

/// Display detailed info for a single instruction
pub fn display_instruction_detail(instruction: &Instruction, options: DisplayOptions) {
    print_header(&format!("Instruction: {}", instruction.name.green()));
    print_docs(instruction.docs.as_ref(), 2, options);

    if let Some(discriminator) = &instruction.discriminator {
        print_field("Discriminator", &format_discriminator(discriminator));
    }

    print_subheader(&format!("Accounts ({})", instruction.accounts.len()));
    if instruction.accounts.is_empty() {
        print_none();
    } else {
        for (i, account) in instruction.accounts.iter().enumerate() {
            println!(
                "  {}. {} {}",
                format!("{:>2}", i + 1).dimmed(),
                account.name.yellow(),
                format_account_constraints(account)
            );
            print_docs(account.docs.as_ref(), 6, options);
        }
    }

    print_subheader(&format!("Arguments ({})", instruction.args.len()));
    print_fields(&instruction.args, options);
    println!();
}

/// Format account constraints like [signer, writable]
fn format_account_constraints(account: &InstructionAccount) -> String {
    let mut constraints = Vec::new();

    if account.is_writable {
        constraints.push("writable".magenta().to_string());
    }
    if account.is_signer {
        constraints.push("signer".green().to_string());
    }
    if account.is_optional {
        constraints.push("optional".dimmed().to_string());
    }

    if constraints.is_empty() {
        String::new()
    } else {
        format!("[{}]", constraints.join(", "))
    }
}

/// Display every named type definition
pub fn display_types(program: &Program, options: DisplayOptions) {
    print_header(&format!(
        "Types for {} ({} total)",
        program.display_name(),
        program.types.len()
    ));

    if program.types.is_empty() {
        print_none();
    }
    for def in &program.types {
        print_subheader(&format!("{} {}", def.name, format_type(&def.ty).dimmed()));
        print_docs(def.docs.as_ref(), 2, options);
        match &def.ty {
            TypeNode::Struct { fields } => print_fields(fields, options),
            TypeNode::Enum { variants } => {
                for (i, variant) in variants.iter().enumerate() {
                    print_numbered_item(i + 1, &variant.green().to_string());
                }
            }
            other => println!("  = {}", format_type(other).blue()),
        }
    }
    println!();
}

/// Display list of all errors
pub fn display_errors_list(program: &Program, options: DisplayOptions) {
    print_header(&format!(
        "Errors for {} ({} total)",
        program.display_name(),
        program.errors.len()
    ));

    if program.errors.is_empty() {
        print_none();
    } else {
        println!(
            "  {}  {}  {}",
            format!("{:<6}", "Code").dimmed(),
            format!("{:<24}", "Name").dimmed(),
            "Message".dimmed()
        );
        println!(
            "  {}  {}  {}",
            "─".repeat(6),
            "─".repeat(24),
            "─".repeat(30)
        );

        for error in &program.errors {
            let msg = error.message.as_deref().unwrap_or("-");
            println!(
                "  {}  {}  {}",
                format!("{:<6}", error.code).red(),
                format!("{:<24}", error.name).yellow(),
                msg.dimmed()
            );
            print_docs(error.docs.as_ref(), 36, options);
        }
    }
    println!();
}

/// Display every event with its fields
pub fn display_events(program: &Program, options: DisplayOptions) {
    print_header(&format!(
        "Events for {} ({} total)",
        program.display_name(),
        program.events.len()
    ));

    if program.events.is_empty() {
        print_none();
    }
    for event in &program.events {
        print_subheader(&event.name);
        print_docs(event.docs.as_ref(), 2, options);
        if let Some(discriminator) = &event.discriminator {
            print_field("Discriminator", &format_discriminator(discriminator));
        }
        print_fields(&event.fields, options);
    }
    println!();
}

/// Display a generated snippet, or why none was generated
pub fn display_snippet(target: SnippetTarget<'_>, snippet: &Snippet) {
    match snippet {
        Snippet::Code(code) => {
            print_header(&format!("{} snippet: {}", target.kind(), target.name()));
            println!("{}", code);
        }
        Snippet::Inapplicable { program } => {
            eprintln!(
                "{} no snippet for {} '{}': {} ({}) is a standard program",
                "Note:".yellow().bold(),
                target.kind(),
                target.name(),
                program.name,
                program.public_key
            );
        }
    }
}

/// Display an error message
pub fn display_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

/// Display entity not found error with suggestions
pub fn display_not_found(kind: EntityKind, name: &str, available: &[&str]) {
    display_error(&format!("{} '{}' not found", kind, name));

    if !available.is_empty() {
        eprintln!();
        eprintln!("{}", format!("Available {}s:", kind).to_lowercase().dimmed());
        for entity_name in available.iter().take(10) {
            eprintln!("  - {}", entity_name.green());
        }
        if available.len() > 10 {
            eprintln!(
                "  {} more...",
                format!("(+{})", available.len() - 10).dimmed()
            );
        }
    }
}
