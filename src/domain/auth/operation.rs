/// Operations exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Health,
    Register,
    Login,
    CurrentUser,
    ListJobs,
    CreateJob,
    GetJob,
    UpdateJob,
    DeleteJob,
    GenerateDescription,
}

impl Operation {
    /// Liveness, registration and login are open to anonymous callers;
    /// everything else needs a valid token.
    pub fn requires_authentication(&self) -> bool {
        !matches!(self, Self::Health | Self::Register | Self::Login)
    }

    /// Map an HTTP method and route template to its operation.
    /// `HEAD` resolves like `GET`.
    pub fn from_route(method: &str, path: &str) -> Option<Self> {
        let method = match method {
            "HEAD" => "GET",
            other => other,
        };

        let operation = match (method, path) {
            ("GET", "/api/health") => Self::Health,
            ("POST", "/api/auth/register") => Self::Register,
            ("POST", "/api/auth/login") => Self::Login,
            ("GET", "/api/auth/me") => Self::CurrentUser,
            ("GET", "/api/jobs") => Self::ListJobs,
            ("POST", "/api/jobs") => Self::CreateJob,
            ("GET", "/api/jobs/{id}") => Self::GetJob,
            ("PUT", "/api/jobs/{id}") => Self::UpdateJob,
            ("DELETE", "/api/jobs/{id}") => Self::DeleteJob,
            ("POST", "/api/ai/generate-description") => Self::GenerateDescription,
            _ => return None,
        };

        Some(operation)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Register => "register",
            Self::Login => "login",
            Self::CurrentUser => "current_user",
            Self::ListJobs => "list_jobs",
            Self::CreateJob => "create_job",
            Self::GetJob => "get_job",
            Self::UpdateJob => "update_job",
            Self::DeleteJob => "delete_job",
            Self::GenerateDescription => "generate_description",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_operations() {
        assert!(!Operation::Health.requires_authentication());
        assert!(!Operation::Register.requires_authentication());
        assert!(!Operation::Login.requires_authentication());
    }

    #[test]
    fn test_protected_operations() {
        for op in [
            Operation::CurrentUser,
            Operation::ListJobs,
            Operation::CreateJob,
            Operation::GetJob,
            Operation::UpdateJob,
            Operation::DeleteJob,
            Operation::GenerateDescription,
        ] {
            assert!(op.requires_authentication(), "{op} should require a token");
        }
    }

    #[test]
    fn test_from_route() {
        assert_eq!(Operation::from_route("GET", "/api/health"), Some(Operation::Health));
        assert_eq!(
            Operation::from_route("DELETE", "/api/jobs/{id}"),
            Some(Operation::DeleteJob)
        );
        assert_eq!(
            Operation::from_route("POST", "/api/ai/generate-description"),
            Some(Operation::GenerateDescription)
        );
        assert_eq!(Operation::from_route("PATCH", "/api/jobs/{id}"), None);
        assert_eq!(Operation::from_route("GET", "/api/jobs/7"), None);
    }

    #[test]
    fn test_head_resolves_like_get() {
        assert_eq!(Operation::from_route("HEAD", "/api/jobs"), Some(Operation::ListJobs));
        assert_eq!(Operation::from_route("HEAD", "/api/jobs/{id}"), Some(Operation::GetJob));
        assert_eq!(
            Operation::from_route("HEAD", "/api/auth/me"),
            Some(Operation::CurrentUser)
        );
        assert_eq!(Operation::from_route("HEAD", "/api/ai/generate-description"), None);
    }
}
