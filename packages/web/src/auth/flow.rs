//! Two-step login flow state
//!
//! The login page drives this from a signal; keeping the transitions on a
//! plain struct keeps them testable without rendering.

/// Which form the login page is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoginStep {
    #[default]
    Phone,
    Otp,
}

/// Local, per-visit login state. Created when the page mounts, discarded on
/// navigation. Re-enterable: there is no terminal step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFlow {
    step: LoginStep,
    phone: String,
    code: String,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_phone(&mut self, value: String) {
        self.phone = value;
    }

    pub fn set_code(&mut self, value: String) {
        self.code = value;
    }

    /// Trimmed phone number, if there is anything to submit.
    pub fn submittable_phone(&self) -> Option<String> {
        let phone = self.phone.trim();
        (!phone.is_empty()).then(|| phone.to_string())
    }

    /// Trimmed code, if there is anything to submit.
    pub fn submittable_code(&self) -> Option<String> {
        let code = self.code.trim();
        (!code.is_empty()).then(|| code.to_string())
    }

    /// A code was sent for the entered phone; show the code form.
    pub fn code_sent(&mut self) {
        self.step = LoginStep::Otp;
    }

    /// Return to phone entry, discarding the entered code.
    pub fn change_phone(&mut self) {
        self.step = LoginStep::Phone;
        self.code.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_phone_entry() {
        let flow = LoginFlow::new();
        assert_eq!(flow.step(), LoginStep::Phone);
        assert!(flow.phone().is_empty());
        assert!(flow.code().is_empty());
    }

    #[test]
    fn empty_inputs_are_not_submittable() {
        let mut flow = LoginFlow::new();
        assert_eq!(flow.submittable_phone(), None);

        flow.set_phone("   ".to_string());
        assert_eq!(flow.submittable_phone(), None);

        flow.set_code("".to_string());
        assert_eq!(flow.submittable_code(), None);
    }

    #[test]
    fn sending_a_code_advances_to_otp_entry() {
        let mut flow = LoginFlow::new();
        flow.set_phone(" +1234567890 ".to_string());
        assert_eq!(flow.submittable_phone().as_deref(), Some("+1234567890"));

        flow.code_sent();
        assert_eq!(flow.step(), LoginStep::Otp);
        // The phone survives the transition so the code form can show it.
        assert_eq!(flow.phone(), " +1234567890 ");
    }

    #[test]
    fn changing_the_phone_clears_the_entered_code() {
        let mut flow = LoginFlow::new();
        flow.set_phone("+1234567890".to_string());
        flow.code_sent();
        flow.set_code("123456".to_string());

        flow.change_phone();
        assert_eq!(flow.step(), LoginStep::Phone);
        assert!(flow.code().is_empty());
        assert_eq!(flow.phone(), "+1234567890");
    }

    #[test]
    fn flow_is_re_enterable() {
        let mut flow = LoginFlow::new();
        flow.set_phone("+1".to_string());
        flow.code_sent();
        flow.change_phone();
        flow.code_sent();
        assert_eq!(flow.step(), LoginStep::Otp);
    }
}
