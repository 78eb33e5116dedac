use std::fmt;

/// The fixed set of actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Quit,
}

impl MenuAction {
    /// Menu order
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddDepartment,
        MenuAction::AddRole,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "View all departments",
            MenuAction::ViewRoles => "View all roles",
            MenuAction::ViewEmployees => "View all employees",
            MenuAction::AddDepartment => "Add a department",
            MenuAction::AddRole => "Add a role",
            MenuAction::AddEmployee => "Add an employee",
            MenuAction::UpdateEmployeeRole => "Update an employee role",
            MenuAction::Quit => "Quit",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|action| action.label().to_string()).collect()
    }

    pub fn from_index(index: usize) -> Option<MenuAction> {
        Self::ALL.get(index).copied()
    }

    /// Position in the menu, for scripted selection
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|action| action == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_eight_actions_ending_with_quit() {
        assert_eq!(MenuAction::ALL.len(), 8);
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Quit));
        assert_eq!(MenuAction::labels()[0], "View all departments");
    }

    #[test]
    fn test_index_round_trips() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_index(action.index()), Some(action));
        }
        assert_eq!(MenuAction::from_index(8), None);
    }
}
