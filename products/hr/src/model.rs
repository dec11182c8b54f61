use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned by storage on first save.
pub type EmployeeId = i64;

/// An employee record as exchanged over the API.
///
/// `id` is `None` until the record has been saved once. The JSON field names
/// follow the public contract (`employeeId`, `employeeFirstName`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    #[serde(rename = "employeeId", default)]
    pub id: Option<EmployeeId>,
    #[serde(rename = "employeeFirstName")]
    pub first_name: String,
    #[serde(rename = "employeeLastName")]
    pub last_name: String,
    #[serde(rename = "employeeEmail")]
    pub email: String,
}

impl Employee {
    /// Build a record that has not been persisted yet.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Overwrite the mutable fields with the ones from `details`.
    /// The identifier is never taken from `details`.
    pub fn merge_details(&mut self, details: Employee) {
        self.first_name = details.first_name;
        self.last_name = details.last_name;
        self.email = details.email;
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Employee{{employeeId=")?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => write!(f, "null")?,
        }
        write!(
            f,
            ", employeeFirstName='{}', employeeLastName='{}', employeeEmail='{}'}}",
            self.first_name, self.last_name, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_contract_field_names() {
        let mut employee = Employee::new("Ann", "Lee", "ann@x.com");
        employee.id = Some(1);
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            json!({
                "employeeId": 1,
                "employeeFirstName": "Ann",
                "employeeLastName": "Lee",
                "employeeEmail": "ann@x.com"
            })
        );
    }

    #[test]
    fn payload_without_id_deserializes() {
        let employee: Employee = serde_json::from_value(json!({
            "employeeFirstName": "Ann",
            "employeeLastName": "Lee",
            "employeeEmail": "ann@x.com"
        }))
        .unwrap();
        assert_eq!(employee, Employee::new("Ann", "Lee", "ann@x.com"));
    }

    #[test]
    fn merge_keeps_identifier() {
        let mut stored = Employee::new("Ann", "Lee", "ann@x.com");
        stored.id = Some(7);
        let mut details = Employee::new("Bo", "Smith", "bo@x.com");
        details.id = Some(99);

        stored.merge_details(details);

        assert_eq!(stored.id, Some(7));
        assert_eq!(stored.first_name, "Bo");
        assert_eq!(stored.last_name, "Smith");
        assert_eq!(stored.email, "bo@x.com");
    }

    #[test]
    fn display_lists_every_field() {
        let employee = Employee::new("Ann", "Lee", "ann@x.com");
        assert_eq!(
            employee.to_string(),
            "Employee{employeeId=null, employeeFirstName='Ann', employeeLastName='Lee', employeeEmail='ann@x.com'}"
        );
    }
}
