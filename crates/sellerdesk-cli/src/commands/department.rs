//! Department commands
//!
//! Usage: sellerdesk department <add|list|rename|delete>

use clap::{Args, Subcommand};
use rusqlite::Connection;
use sellerdesk_core::model::Department;
use sellerdesk_core::DepartmentDao;
use sellerdesk_store::DaoFactory;

#[derive(Debug, Args)]
pub struct DepartmentArgs {
    #[command(subcommand)]
    pub command: DepartmentCommand,
}

#[derive(Debug, Subcommand)]
pub enum DepartmentCommand {
    /// Create a department
    Add {
        name: String,
    },
    /// List departments by name
    List {
        #[arg(long)]
        json: bool,
    },
    /// Rename an existing department
    Rename {
        id: i64,
        name: String,
    },
    /// Delete a department (fails while sellers reference it)
    Delete {
        id: i64,
    },
}

pub fn execute(args: DepartmentArgs, conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let dao = DaoFactory::new(conn).department_dao();

    match args.command {
        DepartmentCommand::Add { name } => {
            let mut department = Department::new(name);
            dao.insert(&mut department)?;
            println!(
                "Department created: {} {}",
                department.id.unwrap_or_default(),
                department.name
            );
        }
        DepartmentCommand::List { json } => {
            let departments = dao.find_all()?;
            if json {
                super::print_json(&departments)?;
            } else {
                for department in &departments {
                    println!("{:>4}  {}", department.id.unwrap_or_default(), department.name);
                }
            }
        }
        DepartmentCommand::Rename { id, name } => {
            let mut department = dao
                .find_by_id(id)?
                .ok_or_else(|| format!("department {} not found", id))?;
            department.name = name;
            dao.update(&department)?;
            println!("Department renamed: {} {}", id, department.name);
        }
        DepartmentCommand::Delete { id } => {
            dao.delete_by_id(id)?;
            println!("Department deleted: {}", id);
        }
    }

    Ok(())
}
