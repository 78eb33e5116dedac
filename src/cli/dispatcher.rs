use crate::cli::command_handlers::{
    DepartmentHandler, EmployeeHandler, RoleHandler, ViewHandler, ViewTarget,
};
use crate::cli::menu::MenuAction;
use crate::cli::prompt::Prompter;
use crate::core::services::traits::Gateway;
use crate::display::TableDisplay;
use crate::error::{AppError, PromptError};
use crate::utils::error_helpers::report_error;
use crate::utils::logging::{log_info, print_verbose};

const MENU_MESSAGE: &str = "What would you like to do?";

/// What the menu loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Top-level controller: owns the gateway for the whole session and releases it on
/// quit or on a fatal error.
pub struct Dispatcher {
    gateway: Box<dyn Gateway>,
    prompter: Box<dyn Prompter>,
    display: TableDisplay,
    verbose: bool,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(gateway: Box<dyn Gateway>, prompter: Box<dyn Prompter>, verbose: bool) -> Self {
        Self {
            gateway,
            prompter,
            display: TableDisplay::from_env(),
            verbose,
        }
    }

    pub fn with_display(mut self, display: TableDisplay) -> Self {
        self.display = display;
        self
    }

    /// Show the menu until the user quits.
    pub async fn run(mut self) -> Result<(), AppError> {
        loop {
            let action = match self.prompt_action() {
                Ok(action) => action,
                // Esc / Ctrl-C on the menu itself means quit
                Err(PromptError::Canceled | PromptError::Interrupted) => MenuAction::Quit,
                Err(e) => {
                    self.gateway.close().await;
                    return Err(e.into());
                }
            };

            match self.dispatch(action).await {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Quit) => return Ok(()),
                Err(e) if e.is_fatal() => {
                    self.gateway.close().await;
                    return Err(e);
                }
                Err(e) => {
                    log::debug!("{} ended with {:?}", action, e);
                    report_error(&e);
                }
            }
        }
    }

    fn prompt_action(&mut self) -> Result<MenuAction, PromptError> {
        let index = self.prompter.select(MENU_MESSAGE, &MenuAction::labels())?;
        MenuAction::from_index(index).ok_or_else(|| PromptError::Terminal {
            message: format!("menu selection {} out of range", index),
        })
    }

    /// Run one action. Database failures are handled inside the handlers; only prompt
    /// and rendering problems come back as errors.
    pub async fn dispatch(&mut self, action: MenuAction) -> Result<LoopControl, AppError> {
        self.log_verbose(&format!("Selected: {}", action));

        let gateway = self.gateway.as_ref();
        let prompter = self.prompter.as_mut();
        let outcome = match action {
            MenuAction::ViewDepartments => {
                ViewHandler::new(&self.display)
                    .handle(ViewTarget::Departments, gateway, self.verbose)
                    .await?
            }
            MenuAction::ViewRoles => {
                ViewHandler::new(&self.display)
                    .handle(ViewTarget::Roles, gateway, self.verbose)
                    .await?
            }
            MenuAction::ViewEmployees => {
                ViewHandler::new(&self.display)
                    .handle(ViewTarget::Employees, gateway, self.verbose)
                    .await?
            }
            MenuAction::AddDepartment => DepartmentHandler::new().add(gateway, prompter).await?,
            MenuAction::AddRole => RoleHandler::new().add(gateway, prompter).await?,
            MenuAction::AddEmployee => EmployeeHandler::new().add(gateway, prompter).await?,
            MenuAction::UpdateEmployeeRole => {
                EmployeeHandler::new().update_role(gateway, prompter).await?
            }
            MenuAction::Quit => {
                log_info("Quit.");
                gateway.close().await;
                return Ok(LoopControl::Quit);
            }
        };

        self.log_verbose(&format!("{} finished: {:?}", action, outcome));
        Ok(LoopControl::Continue)
    }
}
