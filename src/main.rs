use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};

use anyhow::{Result, anyhow};
use clap::{Arg, ArgMatches, Command};
use regex::Regex;

use boolmin::api::{self, ProcessOptions, ProcessOutput, ProcessRequest, ProcessResponse};
use boolmin::expr::{Expr, FormatOptions, OperatorStyle, ParenStyle, format_expr};
use boolmin::minimize::{cover_to_expr, implicant_to_expr, rewrite};
use boolmin::qm::{self, Implicant, StepKind};
use boolmin::{Diagnostics, TruthTable, generate_variable_names};

fn main() {
    let matches = Command::new("boolmin")
        .version("0.1.0")
        .about("Boolean formula minimizer using Quine-McCluskey with Petrick's method")
        .subcommand(
            Command::new("simplify")
                .about("Minimize a Boolean formula")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Formula text, or a path to a file containing one")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(["human", "json"])
                        .default_value("human"),
                )
                .arg(
                    Arg::new("operators")
                        .long("operators")
                        .help("Operator rendering style")
                        .value_parser(["symbolic", "word"])
                        .default_value("symbolic"),
                )
                .arg(
                    Arg::new("parens")
                        .long("parens")
                        .help("Parenthesization style")
                        .value_parser(["minimal", "full"])
                        .default_value("minimal"),
                )
                .arg(
                    Arg::new("show-trace")
                        .long("show-trace")
                        .help("Show the pass-by-pass minimization trace")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate a formula against an assignment")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Formula text, or a path to a file containing one")
                        .required(true),
                )
                .arg(
                    Arg::new("assign")
                        .short('a')
                        .long("assign")
                        .help("Assignment like 'a=1,b=0'")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Print the truth table of a formula")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Formula text, or a path to a file containing one")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(["human", "json"])
                        .default_value("human"),
                ),
        )
        .subcommand(
            Command::new("process")
                .about("Run the full pipeline and dump every artifact")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("JSON request file, inline JSON request, or formula text")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(["human", "json"])
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("minimize")
                .about("Minimize a raw minterm list")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Input like 'f(A,B,C) = Σ(1,3,7)', 'minimize minterms 1,3 with 2 variables', or 'truth table: 0110'")
                        .required(true),
                ),
        )
        .subcommand(Command::new("interactive").about("Interactive mode"))
        .subcommand(Command::new("examples").about("Show usage examples"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("simplify", sub_matches)) => handle_simplify(sub_matches),
        Some(("eval", sub_matches)) => handle_eval(sub_matches),
        Some(("table", sub_matches)) => handle_table(sub_matches),
        Some(("process", sub_matches)) => handle_process(sub_matches),
        Some(("minimize", sub_matches)) => handle_minimize(sub_matches),
        Some(("interactive", _)) => handle_interactive(),
        Some(("examples", _)) => handle_examples(),
        _ => {
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Treat the input as a file path first, falling back to literal text.
fn read_formula(input: &str) -> String {
    match fs::read_to_string(input) {
        Ok(contents) => contents.trim().to_string(),
        Err(_) => input.to_string(),
    }
}

fn process_options(matches: &ArgMatches) -> ProcessOptions {
    let operators = match matches.get_one::<String>("operators").map(String::as_str) {
        Some("word") => OperatorStyle::Word,
        _ => OperatorStyle::Symbolic,
    };
    let parentheses = match matches.get_one::<String>("parens").map(String::as_str) {
        Some("full") => ParenStyle::Full,
        _ => ParenStyle::Minimal,
    };
    ProcessOptions {
        operators,
        parentheses,
    }
}

fn handle_simplify(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("input is required by clap");
    let format = matches.get_one::<String>("format").expect("format has default value in clap");
    let show_trace = matches.get_flag("show-trace");

    let formula = read_formula(input);
    let output = api::process(&formula, &process_options(matches))?;

    match format.as_str() {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&ProcessResponse::from_output(&output))?
        ),
        _ => print_simplify_human(&formula, &output, show_trace),
    }

    Ok(())
}

fn print_simplify_human(formula: &str, output: &ProcessOutput, show_trace: bool) {
    let diagnostics = &output.diagnostics;

    println!("Input:");
    println!("  F = {}", formula);
    println!();
    println!("Minimized Expression:");
    println!("  F = {}", output.simplified);

    println!();
    println!("Prime Implicants:");
    for prime in &diagnostics.prime_implicants {
        println!("  • {}", describe_implicant(prime, &diagnostics.variables));
    }

    println!();
    println!("Minimal Covers:");
    for (i, cover) in diagnostics.minimal_covers.iter().enumerate() {
        let cost: usize = cover.iter().map(Implicant::literal_count).sum();
        let patterns: Vec<String> = cover.iter().map(ToString::to_string).collect();
        println!("  {}. {{{}}} ({} literals)", i + 1, patterns.join(", "), cost);
    }

    println!();
    println!("Selected Cover:");
    for prime in &diagnostics.selected_cover {
        println!("  • {}", describe_implicant(prime, &diagnostics.variables));
    }

    if show_trace {
        print_trace(diagnostics);
    }
}

fn describe_implicant(implicant: &Implicant, variables: &[String]) -> String {
    if variables.is_empty() {
        return implicant.to_string();
    }
    let term = implicant_to_expr(implicant, variables);
    format!(
        "{} ({})",
        implicant,
        format_expr(&term, &FormatOptions::default())
    )
}

fn print_trace(diagnostics: &Diagnostics) {
    println!();
    println!("Minimization Trace:");
    for (i, step) in diagnostics.trace.iter().enumerate() {
        match step.kind {
            StepKind::Grouping => {
                println!("  Step {}: initial grouping", i + 1);
                for group in &step.groups_after {
                    println!("    group {}: {}", group.ones, join_implicants(&group.implicants));
                }
            }
            StepKind::Merge => {
                println!("  Step {}: merge pass", i + 1);
                for detail in &step.merges {
                    println!(
                        "    groups {} x {}: merged [{}], unmerged [{}]",
                        detail.group_id,
                        detail.next_group_id,
                        join_implicants(&detail.merged),
                        join_implicants(&detail.unmerged)
                    );
                }
                println!(
                    "    carried as prime: [{}]",
                    join_implicants(&step.unmerged_carried)
                );
            }
        }
    }
}

fn join_implicants(implicants: &[Implicant]) -> String {
    implicants
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_assignment(input: &str) -> Result<HashMap<String, bool>> {
    let mut assignment = HashMap::new();
    for pair in input.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid assignment entry: '{}' (expected name=value)", pair))?;
        let value = match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => true,
            "0" | "false" => false,
            other => return Err(anyhow!("Invalid truth value: '{}'", other)),
        };
        assignment.insert(name.trim().to_string(), value);
    }
    Ok(assignment)
}

fn handle_eval(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("input is required by clap");
    let assign = matches.get_one::<String>("assign").expect("assign is required by clap");

    let formula = read_formula(input);
    let assignment = parse_assignment(assign)?;
    let value = boolmin::eval_text(&formula, &assignment)?;

    println!("{} = {}", formula, value);
    Ok(())
}

fn handle_table(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("input is required by clap");
    let format = matches.get_one::<String>("format").expect("format has default value in clap");

    let formula = read_formula(input);
    let table = boolmin::truth_table_text(&formula)?;

    match format.as_str() {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&api::rows_response(&table))?
        ),
        _ => {
            println!("Truth Table:");
            print!("{}", render_table(&table));
        }
    }
    Ok(())
}

fn render_table(table: &TruthTable) -> String {
    let mut out = String::new();

    for name in &table.variables {
        out.push_str(name);
        out.push(' ');
    }
    out.push_str("| F\n");

    let width: usize = table.variables.iter().map(|name| name.len() + 1).sum::<usize>() + 3;
    out.push_str(&"-".repeat(width));
    out.push('\n');

    for row in &table.rows {
        for name in &table.variables {
            let bit = if row.assignment[name] { '1' } else { '0' };
            out.push_str(&format!("{:>width$} ", bit, width = name.len()));
        }
        out.push_str(&format!("| {}\n", if row.result { '1' } else { '0' }));
    }

    out
}

/// Accept a JSON request from a file, inline JSON, or bare formula text.
fn parse_process_input(input: &str) -> ProcessRequest {
    if let Ok(contents) = fs::read_to_string(input) {
        if let Ok(request) = serde_json::from_str::<ProcessRequest>(&contents) {
            return request;
        }
        return ProcessRequest {
            formula: contents.trim().to_string(),
            operators: OperatorStyle::default(),
            parentheses: ParenStyle::default(),
        };
    }

    if let Ok(request) = serde_json::from_str::<ProcessRequest>(input) {
        return request;
    }

    ProcessRequest {
        formula: input.to_string(),
        operators: OperatorStyle::default(),
        parentheses: ParenStyle::default(),
    }
}

fn handle_process(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("input is required by clap");
    let format = matches.get_one::<String>("format").expect("format has default value in clap");

    let request = parse_process_input(input);
    let output = api::process(&request.formula, &request.options())?;

    match format.as_str() {
        "human" => {
            print_simplify_human(&request.formula, &output, true);
            println!();
            println!("Truth Table:");
            print!("{}", render_table(&output.truth_table));
        }
        _ => println!(
            "{}",
            serde_json::to_string_pretty(&ProcessResponse::from_output(&output))?
        ),
    }
    Ok(())
}

fn handle_minimize(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("input is required by clap");
    let (minterms, names) = parse_minterm_input(input)?;
    let n = names.len();

    let (primes, _) = qm::prime_implicants(&minterms, n);
    let coverage = qm::coverage_table(&primes, &minterms);
    let covers = qm::minimal_covers(&coverage);

    let expr = if minterms.is_empty() {
        Expr::Const(false)
    } else {
        let selected = covers
            .iter()
            .min_by_key(|cover| cover.iter().map(Implicant::literal_count).sum::<usize>())
            .ok_or_else(|| anyhow!("no minimal cover found"))?;
        rewrite(cover_to_expr(selected, &names))
    };

    println!("Input:");
    println!("  minterms: {:?} over {} variables", minterms, n);
    println!();
    println!("Minimized Expression:");
    println!("  F = {}", format_expr(&expr, &FormatOptions::default()));
    println!();
    println!("Prime Implicants:");
    for prime in &primes {
        println!("  • {}", describe_implicant(prime, &names));
    }
    println!();
    println!("Minimal Covers:");
    for (i, cover) in covers.iter().enumerate() {
        let cost: usize = cover.iter().map(Implicant::literal_count).sum();
        let patterns: Vec<String> = cover.iter().map(ToString::to_string).collect();
        println!("  {}. {{{}}} ({} literals)", i + 1, patterns.join(", "), cost);
    }

    Ok(())
}

/// Parse the raw minterm input forms.
fn parse_minterm_input(input: &str) -> Result<(Vec<usize>, Vec<String>)> {
    let input = input.trim();

    // Pattern 1: f(A,B,C) = Σ(1,3,7)
    let sigma_pattern = Regex::new(r"f\(([A-Za-z_][A-Za-z_0-9,\s]*)\)\s*=\s*Σ\(([0-9,\s]*)\)")?;
    if let Some(caps) = sigma_pattern.captures(input) {
        let names: Vec<String> = caps[1]
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let minterms = parse_minterm_list(&caps[2])?;
        validate_minterms(&minterms, names.len())?;
        return Ok((minterms, names));
    }

    // Pattern 2: "minimize minterms 1,3,7 with 3 variables"
    let simple_pattern = Regex::new(r"minimize\s+minterms?\s+([0-9,\s]+)\s+with\s+(\d+)\s+variables?")?;
    if let Some(caps) = simple_pattern.captures(input) {
        let minterms = parse_minterm_list(&caps[1])?;
        let variables: usize = caps[2].parse()?;
        validate_minterms(&minterms, variables)?;
        return Ok((minterms, generate_variable_names(variables)));
    }

    // Pattern 3: Truth table format "truth table: 00110110"
    let tt_pattern = Regex::new(r"truth\s+table:\s*([01]+)")?;
    if let Some(caps) = tt_pattern.captures(input) {
        let column = &caps[1];
        if !column.len().is_power_of_two() {
            return Err(anyhow!(
                "Truth table length must be a power of two, got {}",
                column.len()
            ));
        }
        let variables = column.len().ilog2() as usize;
        let minterms: Vec<usize> = column
            .chars()
            .enumerate()
            .filter_map(|(i, c)| if c == '1' { Some(i) } else { None })
            .collect();
        validate_minterms(&minterms, variables)?;
        return Ok((minterms, generate_variable_names(variables)));
    }

    Err(anyhow!(
        "Could not parse input format. Supported formats:\n\
         - Function notation: f(A,B,C) = Σ(1,3,7)\n\
         - Simple: minimize minterms 1,3,7 with 3 variables\n\
         - Truth table: truth table: 00110110"
    ))
}

fn parse_minterm_list(text: &str) -> Result<Vec<usize>> {
    text.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            s.trim()
                .parse()
                .map_err(|e| anyhow!("Failed to parse minterm '{}': {}", s.trim(), e))
        })
        .collect()
}

fn validate_minterms(minterms: &[usize], variables: usize) -> Result<()> {
    if variables > boolmin::MAX_VARIABLES {
        return Err(anyhow!(
            "Too many variables: {} (limit is {})",
            variables,
            boolmin::MAX_VARIABLES
        ));
    }
    let limit = 1usize << variables;
    for &minterm in minterms {
        if minterm >= limit {
            return Err(anyhow!(
                "Minterm {} does not fit in {} variables (max {})",
                minterm,
                variables,
                limit - 1
            ));
        }
    }
    Ok(())
}

fn handle_interactive() -> Result<()> {
    println!("boolmin interactive mode");
    println!("Enter a formula to minimize it, e.g. a & (a | b)");
    println!("Type 'help' for options, 'quit' to exit");
    println!();

    loop {
        print!("boolmin> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            "quit" | "exit" => break,
            "help" => print_interactive_help(),
            "examples" => print_examples(),
            "" => continue,
            _ => match api::process(input, &ProcessOptions::default()) {
                Ok(output) => {
                    println!();
                    print_simplify_human(input, &output, false);
                    println!();
                }
                Err(e) => eprintln!("Error: {}", e),
            },
        }
    }

    Ok(())
}

fn print_interactive_help() {
    println!();
    println!("Interactive mode commands:");
    println!("  help      Show this help");
    println!("  examples  Show usage examples");
    println!("  quit      Exit interactive mode");
    println!("  anything else is minimized as a formula");
    println!();
}

fn handle_examples() -> Result<()> {
    print_examples();
    Ok(())
}

fn print_examples() {
    println!();
    println!("Usage Examples:");
    println!("===============");
    println!();
    println!("1. Minimize a formula:");
    println!("   boolmin simplify -i 'a & (a | b)'");
    println!();
    println!("2. Recognize XOR:");
    println!("   boolmin simplify -i '(!a & b) | (a & !b)'");
    println!();
    println!("3. Word operators, full parentheses:");
    println!("   boolmin simplify -i 'a & b | c' --operators word --parens full");
    println!();
    println!("4. Show the minimization trace:");
    println!("   boolmin simplify -i '(a & b) | (!a & c) | (b & c)' --show-trace");
    println!();
    println!("5. Evaluate against an assignment:");
    println!("   boolmin eval -i 'a & !b' -a 'a=1,b=0'");
    println!();
    println!("6. Print a truth table:");
    println!("   boolmin table -i 'a ^ b'");
    println!();
    println!("7. Full pipeline dump as JSON:");
    println!("   boolmin process -i 'a & (a | b)'");
    println!();
    println!("8. Minimize a raw minterm list:");
    println!("   boolmin minimize -i 'f(A,B,C,D) = Σ(4,8,9,10,11,12,14,15)'");
    println!();
    println!("9. From a truth-table column:");
    println!("   boolmin minimize -i 'truth table: 0110'");
}
