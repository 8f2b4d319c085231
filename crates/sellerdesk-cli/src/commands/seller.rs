//! Seller commands
//!
//! Usage: sellerdesk seller <add|list|show|update|delete>

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rusqlite::Connection;
use rust_decimal::Decimal;
use sellerdesk_core::model::{Department, Seller};
use sellerdesk_core::{DepartmentDao, SellerDao};
use sellerdesk_store::DaoFactory;
use std::sync::Arc;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Args)]
pub struct SellerArgs {
    #[command(subcommand)]
    pub command: SellerCommand,
}

#[derive(Debug, Subcommand)]
pub enum SellerCommand {
    /// Create a seller in an existing department
    Add(AddArgs),
    /// List sellers by name, optionally for one department
    List {
        /// Only sellers of this department id
        #[arg(long)]
        department: Option<i64>,

        #[arg(long)]
        json: bool,
    },
    /// Show one seller
    Show {
        id: i64,

        #[arg(long)]
        json: bool,
    },
    /// Change fields of an existing seller
    Update(UpdateArgs),
    /// Delete a seller
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: NaiveDate,

    #[arg(long)]
    pub base_salary: Decimal,

    /// Department id
    #[arg(long)]
    pub department: i64,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,

    #[arg(long)]
    pub base_salary: Option<Decimal>,

    /// Department id
    #[arg(long)]
    pub department: Option<i64>,
}

pub fn execute(args: SellerArgs, conn: &Connection) -> CliResult<()> {
    let factory = DaoFactory::new(conn);

    match args.command {
        SellerCommand::Add(add) => execute_add(&factory, add),
        SellerCommand::List { department, json } => execute_list(&factory, department, json),
        SellerCommand::Show { id, json } => execute_show(&factory, id, json),
        SellerCommand::Update(update) => execute_update(&factory, update),
        SellerCommand::Delete { id } => {
            factory.seller_dao().delete_by_id(id)?;
            println!("Seller deleted: {}", id);
            Ok(())
        }
    }
}

fn load_department(factory: &DaoFactory<'_>, id: i64) -> CliResult<Department> {
    Ok(factory
        .department_dao()
        .find_by_id(id)?
        .ok_or_else(|| format!("department {} not found", id))?)
}

fn execute_add(factory: &DaoFactory<'_>, args: AddArgs) -> CliResult<()> {
    let department = load_department(factory, args.department)?;
    let mut seller = Seller::new(
        args.name,
        args.email,
        args.birth_date,
        args.base_salary,
        Arc::new(department),
    );

    factory.seller_dao().insert(&mut seller)?;
    println!(
        "Seller created: {} {}",
        seller.id.unwrap_or_default(),
        seller.name
    );
    Ok(())
}

fn execute_list(factory: &DaoFactory<'_>, department: Option<i64>, json: bool) -> CliResult<()> {
    let dao = factory.seller_dao();
    let sellers = match department {
        Some(id) => dao.find_by_department(&load_department(factory, id)?)?,
        None => dao.find_all()?,
    };

    if json {
        return super::print_json(&sellers);
    }
    for seller in &sellers {
        print_row(seller);
    }
    Ok(())
}

fn execute_show(factory: &DaoFactory<'_>, id: i64, json: bool) -> CliResult<()> {
    let seller = factory
        .seller_dao()
        .find_by_id(id)?
        .ok_or_else(|| format!("seller {} not found", id))?;

    if json {
        return super::print_json(&seller);
    }
    print_row(&seller);
    Ok(())
}

fn execute_update(factory: &DaoFactory<'_>, args: UpdateArgs) -> CliResult<()> {
    let dao = factory.seller_dao();
    let mut seller = dao
        .find_by_id(args.id)?
        .ok_or_else(|| format!("seller {} not found", args.id))?;

    if let Some(name) = args.name {
        seller.name = name;
    }
    if let Some(email) = args.email {
        seller.email = email;
    }
    if let Some(birth_date) = args.birth_date {
        seller.birth_date = birth_date;
    }
    if let Some(base_salary) = args.base_salary {
        seller.base_salary = base_salary;
    }
    if let Some(department) = args.department {
        seller.department = Arc::new(load_department(factory, department)?);
    }

    dao.update(&seller)?;
    println!("Seller updated: {} {}", args.id, seller.name);
    Ok(())
}

fn print_row(seller: &Seller) {
    println!(
        "{:>4}  {:<20}  {:<28}  {}  {:>10}  {}",
        seller.id.unwrap_or_default(),
        seller.name,
        seller.email,
        seller.birth_date,
        seller.base_salary,
        seller.department.name
    );
}
