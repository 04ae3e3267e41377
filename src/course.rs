use std::fmt;

/// A single catalog entry, keyed by `number`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Course {
    pub number: String,
    pub name: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            prerequisites,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number: {} Name: {}", self.number, self.name)?;
        if !self.prerequisites.is_empty() {
            write!(f, " Prerequisites: {}", self.prerequisites.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_prerequisites() {
        let course = Course::new("CSCI100", "Introduction to Computer Science", vec![]);
        assert_eq!(
            course.to_string(),
            "Number: CSCI100 Name: Introduction to Computer Science"
        );
    }

    #[test]
    fn display_joins_prerequisites_with_spaces() {
        let course = Course::new(
            "CSCI300",
            "Introduction to Algorithms",
            vec!["CSCI200".to_string(), "MATH201".to_string()],
        );
        assert_eq!(
            course.to_string(),
            "Number: CSCI300 Name: Introduction to Algorithms Prerequisites: CSCI200 MATH201"
        );
    }
}
