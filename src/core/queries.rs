//! SQL statements issued by the menu actions.
//!
//! Reads and writes address the same singular-named tables.

pub const SELECT_ALL_DEPARTMENTS: &str = "SELECT * FROM department ORDER BY id";
pub const SELECT_ALL_ROLES: &str = "SELECT * FROM role ORDER BY id";
pub const SELECT_ALL_EMPLOYEES: &str = "SELECT * FROM employee ORDER BY id";

/// Lookups feeding selection prompts: (query, label column)
pub const DEPARTMENT_CHOICES: (&str, &str) = ("SELECT id, name FROM department ORDER BY id", "name");
pub const ROLE_CHOICES: (&str, &str) = ("SELECT id, title FROM role ORDER BY id", "title");
pub const EMPLOYEE_CHOICES: (&str, &str) = (
    "SELECT id, first_name || ' ' || last_name AS name FROM employee ORDER BY id",
    "name",
);

pub const INSERT_DEPARTMENT: &str = "INSERT INTO department (name) VALUES ($1)";
// Salary travels as text; Postgres does the numeric conversion and rejects bad input.
pub const INSERT_ROLE: &str =
    "INSERT INTO role (title, salary, department_id) VALUES ($1, $2::numeric, $3)";
pub const INSERT_EMPLOYEE: &str =
    "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES ($1, $2, $3, $4)";
pub const UPDATE_EMPLOYEE_ROLE: &str = "UPDATE employee SET role_id = $1 WHERE id = $2";
