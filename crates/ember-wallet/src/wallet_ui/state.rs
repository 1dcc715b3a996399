use ember_wallet_core::{ApproveSpendBlock, ImportLegacyOnboarding};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Unlock,
    Overview,
    OnboardingImport,
    SignTransaction,
}

impl Page {
    /// Resolves a configured route name; unknown names land on the overview.
    pub fn from_route(route: &str) -> Self {
        match route.trim().trim_start_matches('/') {
            "unlock" => Page::Unlock,
            "onboarding/import" | "import" => Page::OnboardingImport,
            "sign-transaction" | "sign" => Page::SignTransaction,
            _ => Page::Overview,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Unlock => "Unlock",
            Page::Overview => "Overview",
            Page::OnboardingImport => "Import wallet",
            Page::SignTransaction => "Sign transaction",
        }
    }

    pub fn requires_unlock(self) -> bool {
        !matches!(self, Page::Unlock)
    }
}

#[derive(Debug, Clone)]
pub struct WalletUiState {
    pub page: Page,
    pub history: Vec<Page>,
    pub password: String,
    pub onboarding: ImportLegacyOnboarding,
    pub approve_spend: ApproveSpendBlock,
    pub request_json: String,
    pub assets_json: String,
    pub balances_json: String,
    pub last_error: Option<String>,
    pub last_info: Option<String>,
}

impl WalletUiState {
    pub fn new(onboarding: ImportLegacyOnboarding) -> Self {
        Self {
            page: Page::Unlock,
            history: Vec::new(),
            password: String::new(),
            onboarding,
            approve_spend: ApproveSpendBlock::default(),
            request_json: String::new(),
            assets_json: String::new(),
            balances_json: String::new(),
            last_error: None,
            last_info: None,
        }
    }

    /// Pushes the current page onto the history and switches to `page`.
    pub fn navigate(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        self.history.push(self.page);
        self.page = page;
        self.clear_notice();
    }

    pub fn back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.page = previous;
            self.clear_notice();
        }
    }

    /// Drops to the unlock page and forgets history; used when the keyrings lock.
    pub fn reset_to_unlock(&mut self) {
        self.page = Page::Unlock;
        self.history.clear();
        self.password.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_info = None;
        self.last_error = Some(message.into());
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.last_error = None;
        self.last_info = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.last_error = None;
        self.last_info = None;
    }
}
