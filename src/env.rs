#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Env {
    pub listen: String,
    pub port: String,
}
impl Default for Env {
    fn default() -> Self {
        Self { listen: "127.0.0.1".to_string(), port: "5000".to_string() }
    }
}
impl Env {
    pub fn environment(default: Self) -> Self {
        Self {
            listen: std::env::var("LISTEN").unwrap_or(default.listen),
            port: std::env::var("PORT").unwrap_or(default.port),
        }
    }

    pub fn bind(&self) -> String {
        format!("{}:{}", self.listen, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        assert_eq!(Env::default().bind(), "127.0.0.1:5000");

        let env = Env { listen: "0.0.0.0".to_string(), port: "8080".to_string() };
        assert_eq!(env.bind(), "0.0.0.0:8080");
    }

    #[test]
    fn test_environment_port_override() {
        std::env::set_var("PORT", "3000");
        let env = Env::environment(Default::default());
        assert_eq!(env.port, "3000");
        std::env::remove_var("PORT");
    }
}
