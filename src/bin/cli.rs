//! orgchart CLI Client
//!
//! Command-line interface for interacting with an orgchart server.

use clap::{Args as ClapArgs, Parser, Subcommand};
use orgchart::model::{CompensationRequest, EmployeeRef};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

/// orgchart CLI
#[derive(Parser, Debug)]
#[command(name = "orgchart-cli")]
#[command(about = "CLI for the orgchart employee directory")]
#[command(version)]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get an employee by id
    Get {
        /// The employee id
        id: String,
    },

    /// Create an employee
    Create(EmployeeFields),

    /// Replace an employee
    Update {
        /// The employee id
        id: String,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Show the reporting structure of an employee
    Reports {
        /// The employee id
        id: String,
    },

    /// Compensation commands
    #[command(subcommand)]
    Comp(CompCommands),

    /// Check the server is up
    Health,
}

#[derive(Subcommand, Debug)]
enum CompCommands {
    /// Get the compensation of an employee
    Get {
        /// The employee id
        id: String,
    },

    /// Create the compensation of an employee
    Create {
        /// The employee id
        id: String,

        /// Annual salary
        salary: f64,

        /// Effective date (YYYY-MM-DD), defaults to today on the server
        #[arg(long)]
        effective_date: Option<String>,
    },

    /// Update the compensation of an employee
    Update {
        /// The employee id
        id: String,

        /// Annual salary
        salary: f64,
    },
}

#[derive(ClapArgs, Debug)]
struct EmployeeFields {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long, default_value = "")]
    position: String,

    #[arg(long, default_value = "")]
    department: String,

    /// Direct report id (repeatable)
    #[arg(long = "report")]
    reports: Vec<String>,
}

impl EmployeeFields {
    fn to_json(&self) -> Value {
        let reports: Vec<EmployeeRef> = self.reports.iter().map(EmployeeRef::new).collect();
        json!({
            "firstName": self.first_name,
            "lastName": self.last_name,
            "position": self.position,
            "department": self.department,
            "directReports": reports,
        })
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let base = args.server.trim_end_matches('/').to_string();

    let (method, path, body) = match args.command {
        Commands::Get { id } => (Method::GET, format!("/employee/{}", id), None),
        Commands::Create(fields) => (Method::POST, "/employee".to_string(), Some(fields.to_json())),
        Commands::Update { id, fields } => {
            (Method::PUT, format!("/employee/{}", id), Some(fields.to_json()))
        }
        Commands::Reports { id } => (
            Method::GET,
            format!("/employee/{}/reporting-structure", id),
            None,
        ),
        Commands::Comp(CompCommands::Get { id }) => {
            (Method::GET, format!("/employee/{}/compensation", id), None)
        }
        Commands::Comp(CompCommands::Create {
            id,
            salary,
            effective_date,
        }) => {
            let mut request = CompensationRequest::new(&id, salary);
            request.effective_date = effective_date;
            (
                Method::POST,
                format!("/employee/{}/compensation", id),
                Some(json!(request)),
            )
        }
        Commands::Comp(CompCommands::Update { id, salary }) => (
            Method::PUT,
            format!("/employee/{}/compensation", id),
            Some(json!(CompensationRequest::new(&id, salary))),
        ),
        Commands::Health => (Method::GET, "/health".to_string(), None),
    };

    match send(&base, method, &path, body).await {
        Ok((status, value)) if status.is_success() => print_json(&value),
        Ok((status, value)) => {
            eprintln!("Request failed with {}", status);
            print_json(&value);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Could not reach {}: {}", base, e);
            std::process::exit(2);
        }
    }
}

async fn send(
    base: &str,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> reqwest::Result<(StatusCode, Value)> {
    let client = reqwest::Client::new();
    let mut request = client.request(method, format!("{}{}", base, path));
    if let Some(body) = body {
        request = request.json(&body);
    }

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    let value = serde_json::from_str(&text).unwrap_or(Value::String(text));

    Ok((status, value))
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{}", pretty),
        Err(_) => println!("{}", value),
    }
}
