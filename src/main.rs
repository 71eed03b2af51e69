//! Realtime Agency Console
//!
//! Interactive console over the scenario catalog:
//! - list scenarios and switch between them
//! - launch a session configuration as the realtime runtime would receive it
//! - call any tool of the active scenario with a JSON argument object
//! - inspect the records the intake tools emitted

use anyhow::Result;
use serde_json::Value;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

use realtime_agency::config::AgencyConfig;
use realtime_agency::orchestrator::{Scenario, ScenarioRegistry};
use realtime_agency::services::{MemorySink, RecordSink, TeeSink, TracingSink};
use realtime_agency::telemetry;
use realtime_agency::tools::{schema, ToolCall, ToolRegistry};

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AgencyConfig::load().await?;
    telemetry::init_logging(&config.log_filter)?;

    println!("\n🏛️  Realtime Agency Console\n");

    let scenarios = ScenarioRegistry::builtin().clone().with_default(&config.default_scenario)?;

    // Records are both logged and kept for the `records` command
    let memory_sink = Arc::new(MemorySink::new());
    let sinks: Vec<Arc<dyn RecordSink>> = vec![memory_sink.clone(), Arc::new(TracingSink)];
    let sink: Arc<dyn RecordSink> = Arc::new(TeeSink::new(sinks));

    let mut scenario = scenarios.resolve(None)?;
    let mut tools = scenario.tool_registry(sink.clone()).await?;
    print_scenario(scenario, &tools).await;

    print_help();

    loop {
        print!("🤖 {}> ", scenario.key());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("\n👋 Goodbye!\n");
                break;
            }
            "help" => print_help(),
            "scenarios" => {
                for summary in scenarios.summaries() {
                    let marker = if summary.key == scenarios.default_key() { "*" } else { " " };
                    println!(
                        " {} {} ({}) agents: {}",
                        marker,
                        summary.key,
                        summary.company_name,
                        summary.agents.join(" → ")
                    );
                }
            }
            "use" => match scenarios.get(rest) {
                Ok(next) => {
                    scenario = next;
                    tools = scenario.tool_registry(sink.clone()).await?;
                    print_scenario(scenario, &tools).await;
                }
                Err(e) => println!("❌ {}", e),
            },
            "session" => {
                let prompt = (!rest.is_empty()).then(|| rest.to_string());
                match scenario.launch(&tools, prompt).await {
                    Ok(session) => println!("{}", serde_json::to_string_pretty(&session)?),
                    Err(e) => println!("❌ {}", e),
                }
            }
            "tools" => {
                let prompt = tools.generate_filtered_tools_prompt(&tools.tool_names().await).await;
                println!("\n{}", prompt);
            }
            "schema" => match tools.get_tool(rest).await {
                Some(tool) => {
                    let parameters = tool.parameters();
                    let required = schema::required_fields(&parameters);
                    for (name, property) in schema::properties(&parameters) {
                        let kind = property.get("type").and_then(Value::as_str).unwrap_or("any");
                        let flag = if required.contains(&name) { " (required)" } else { "" };
                        println!("  {}: {}{}", name, kind, flag);
                    }
                }
                None => println!("❌ Unknown tool: {}", rest),
            },
            "call" => {
                let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, "{}"));
                match serde_json::from_str::<Value>(args.trim()) {
                    Ok(arguments) => match tools.execute(&ToolCall::new(name, arguments)).await {
                        Ok(output) => {
                            println!("\n✅ {}\n", output.summary);
                            if !output.data.is_string() {
                                println!("{}\n", serde_json::to_string_pretty(&output.data)?);
                            }
                        }
                        Err(e) => println!("❌ {}", e),
                    },
                    Err(e) => println!("❌ Arguments must be a JSON object: {}", e),
                }
            }
            "records" => {
                if memory_sink.is_empty() {
                    println!("📭 No records yet.");
                }
                for record in memory_sink.records() {
                    println!(
                        "  [{}] {} {}",
                        record.timestamp.format("%H:%M:%S"),
                        record.kind,
                        Value::Object(record.fields)
                    );
                }
            }
            other => println!("❓ Unknown command '{}'. Type 'help'.", other),
        }
    }

    info!("Console closed with {} records", memory_sink.len());
    Ok(())
}

async fn print_scenario(scenario: &Scenario, tools: &ToolRegistry) {
    println!(
        "🎭 Scenario '{}' for {}: root agent '{}', {} handoff edge(s)",
        scenario.key(),
        scenario.company_name(),
        scenario.root().name,
        scenario.handoffs().edge_count()
    );
    println!("🔧 Tools: {}", tools.tool_names().await.join(", "));
}

fn print_help() {
    println!("\n💡 Commands:");
    println!("   scenarios                list scenarios (* = default)");
    println!("   use <key>                switch scenario");
    println!("   session [prompt]         show the session configuration");
    println!("   tools                    list tools of the scenario");
    println!("   schema <tool>            show a tool's parameters");
    println!("   call <tool> <json>       invoke a tool");
    println!("   records                  show emitted records");
    println!("   quit\n");
}
