use crate::cli::prompt::{Prompter, select_choice, select_optional_choice};
use crate::core::queries;
use crate::core::services::choice_service::ChoiceService;
use crate::core::services::traits::Gateway;
use crate::core::services::types::{Choice, SqlParam};
use crate::display::TableDisplay;
use crate::error::{AppError, PromptError};
use crate::utils::logging::{log_error, log_success, print_verbose};

/// How a handler finished; database failures are reported, not propagated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTarget {
    Departments,
    Roles,
    Employees,
}

impl ViewTarget {
    pub fn query(&self) -> &'static str {
        match self {
            ViewTarget::Departments => queries::SELECT_ALL_DEPARTMENTS,
            ViewTarget::Roles => queries::SELECT_ALL_ROLES,
            ViewTarget::Employees => queries::SELECT_ALL_EMPLOYEES,
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            ViewTarget::Departments => "departments",
            ViewTarget::Roles => "roles",
            ViewTarget::Employees => "employees",
        }
    }
}

/// Stop a form before any question is asked when a required list is empty
fn require_choices(choices: &[Choice], what: &str) -> Result<(), PromptError> {
    if choices.is_empty() {
        return Err(PromptError::NoChoices {
            what: what.to_string(),
        });
    }
    Ok(())
}

/// Run a write and print the outcome
async fn run_write(
    gateway: &dyn Gateway,
    sql: &str,
    params: &[SqlParam],
    success_message: &str,
    error_prefix: &str,
) -> ActionOutcome {
    match gateway.execute(sql, params).await {
        Ok(affected) => {
            log::debug!("{} row(s) affected", affected);
            log_success(success_message);
            ActionOutcome::Completed
        }
        Err(e) => {
            log::debug!("write failed: {:?}", e);
            log_error(&format!("{}: {}", error_prefix, e));
            ActionOutcome::Failed
        }
    }
}

pub struct ViewHandler<'a> {
    display: &'a TableDisplay,
}

impl<'a> ViewHandler<'a> {
    pub fn new(display: &'a TableDisplay) -> Self {
        Self { display }
    }

    /// Query the target table and render it
    pub async fn render(
        &self,
        target: ViewTarget,
        gateway: &dyn Gateway,
    ) -> Result<String, AppError> {
        let result = gateway.query(target.query(), &[]).await?;
        self.display.render_result_set(&result)
    }

    pub async fn handle(
        &self,
        target: ViewTarget,
        gateway: &dyn Gateway,
        verbose: bool,
    ) -> Result<ActionOutcome, AppError> {
        print_verbose(verbose, &format!("Running: {}", target.query()));

        match self.render(target, gateway).await {
            Ok(table) => {
                println!("{}", table);
                Ok(ActionOutcome::Completed)
            }
            Err(AppError::Database(e)) => {
                log::debug!("view failed: {:?}", e);
                log_error(&format!("Error viewing {}: {}", target.noun(), e));
                Ok(ActionOutcome::Failed)
            }
            Err(e) => Err(e),
        }
    }
}

#[derive(Default)]
pub struct DepartmentHandler;

impl DepartmentHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn add(
        &self,
        gateway: &dyn Gateway,
        prompter: &mut dyn Prompter,
    ) -> Result<ActionOutcome, AppError> {
        let name = prompter.text("Enter the department name:")?;

        Ok(run_write(
            gateway,
            queries::INSERT_DEPARTMENT,
            &[SqlParam::from(name.as_str())],
            &format!("Department '{}' added successfully.", name),
            "Error adding department",
        )
        .await)
    }
}

#[derive(Default)]
pub struct RoleHandler;

impl RoleHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn add(
        &self,
        gateway: &dyn Gateway,
        prompter: &mut dyn Prompter,
    ) -> Result<ActionOutcome, AppError> {
        let departments = ChoiceService::new(gateway)
            .load_lookup(queries::DEPARTMENT_CHOICES)
            .await;
        require_choices(&departments, "departments")?;

        let title = prompter.text("Enter the role title:")?;
        // Not validated here; the database decides whether it is numeric
        let salary = prompter.text("Enter the role salary:")?;
        let department = select_choice(prompter, "Select the department:", &departments, "departments")?;

        Ok(run_write(
            gateway,
            queries::INSERT_ROLE,
            &[
                SqlParam::from(title.as_str()),
                SqlParam::from(salary.trim()),
                SqlParam::from(department.id),
            ],
            &format!("Role '{}' added successfully.", title),
            "Error adding role",
        )
        .await)
    }
}

#[derive(Default)]
pub struct EmployeeHandler;

impl EmployeeHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn add(
        &self,
        gateway: &dyn Gateway,
        prompter: &mut dyn Prompter,
    ) -> Result<ActionOutcome, AppError> {
        let choices = ChoiceService::new(gateway);
        let roles = choices.load_lookup(queries::ROLE_CHOICES).await;
        let managers = choices.load_lookup(queries::EMPLOYEE_CHOICES).await;
        require_choices(&roles, "roles")?;

        let first_name = prompter.text("Enter employee first name:")?;
        let last_name = prompter.text("Enter employee last name:")?;
        let role = select_choice(prompter, "Select employee role:", &roles, "roles")?;
        let manager = select_optional_choice(prompter, "Select manager:", &managers)?;

        Ok(run_write(
            gateway,
            queries::INSERT_EMPLOYEE,
            &[
                SqlParam::from(first_name.as_str()),
                SqlParam::from(last_name.as_str()),
                SqlParam::from(role.id),
                SqlParam::from(manager.map(|m| m.id)),
            ],
            &format!("Employee '{} {}' added successfully.", first_name, last_name),
            "Error adding employee",
        )
        .await)
    }

    pub async fn update_role(
        &self,
        gateway: &dyn Gateway,
        prompter: &mut dyn Prompter,
    ) -> Result<ActionOutcome, AppError> {
        let choices = ChoiceService::new(gateway);
        let employees = choices.load_lookup(queries::EMPLOYEE_CHOICES).await;
        let roles = choices.load_lookup(queries::ROLE_CHOICES).await;
        require_choices(&employees, "employees")?;
        require_choices(&roles, "roles")?;

        let employee = select_choice(prompter, "Select the employee:", &employees, "employees")?;
        let role = select_choice(prompter, "Select the new role:", &roles, "roles")?;

        Ok(run_write(
            gateway,
            queries::UPDATE_EMPLOYEE_ROLE,
            &[SqlParam::from(role.id), SqlParam::from(employee.id)],
            "Employee role updated successfully.",
            "Error updating employee role",
        )
        .await)
    }
}
