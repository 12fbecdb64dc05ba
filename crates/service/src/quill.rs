use super::*;
use quill_auth::*;
use quill_core::ID;
use quill_core::Unique;
use quill_posts::*;
use std::sync::Arc;

/// The narrow interface an API surface calls into.
///
/// Owns one store of each kind. Protected calls take the raw bearer token
/// and run it through the [`Verifier`] before touching the [`Blog`].
pub struct Quill {
    registry: Arc<Registry>,
    crypto: Arc<Crypto>,
    verifier: Verifier,
    blog: Blog,
}

impl Quill {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let registry = Arc::new(Registry::new());
        let crypto = Arc::new(
            Crypto::new(config.secret())
                .with_clock(clock)
                .with_ttl(config.ttl())
                .with_leeway(config.leeway()),
        );
        let verifier = Verifier::new(crypto.clone(), registry.clone());
        log::info!(
            "[quill] ready with {}s tokens and {}s leeway",
            config.ttl().as_secs(),
            config.leeway().as_secs()
        );
        Self {
            registry,
            crypto,
            verifier,
            blog: Blog::new(),
        }
    }

    pub fn register(&self, req: RegisterRequest) -> Result<Member, Error> {
        Ok(self
            .registry
            .register(&req.email, &req.name, &req.phone, &req.password)?)
    }

    pub fn login(&self, req: LoginRequest) -> Result<TokenResponse, Error> {
        let member = self
            .registry
            .verify_credentials(&req.username, &req.password)
            .ok_or(AuthError::AuthenticationFailed)?;
        let token = self.crypto.issue_default(member.email())?;
        log::info!("[quill] {} logged in", member.email());
        Ok(TokenResponse::from(token))
    }

    /// The gate. Every protected call goes through here first.
    pub fn authorize(&self, token: &str) -> Result<Subject, Error> {
        Ok(self.verifier.verify(token)?)
    }

    pub fn whoami(&self, token: &str) -> Result<Member, Error> {
        let subject = self.authorize(token)?;
        Ok(self
            .registry
            .find(subject.email())
            .ok_or(AuthError::UnknownSubject)?)
    }

    /// Open to anyone, authenticated or not.
    pub fn posts(&self) -> Vec<Post> {
        self.blog.list()
    }

    pub fn create(&self, token: &str, req: PostRequest) -> Result<Post, Error> {
        let subject = self.authorize(token)?;
        let post = self.blog.create(req.title, req.description);
        log::info!("[quill] {} created post {}", subject.email(), post.id());
        Ok(post)
    }

    pub fn update(&self, token: &str, id: ID<Post>, req: PostRequest) -> Result<Post, Error> {
        let subject = self.authorize(token)?;
        let post = self.blog.update(id, req.title, req.description)?;
        log::info!("[quill] {} updated post {}", subject.email(), id);
        Ok(post)
    }

    pub fn delete(&self, token: &str, id: ID<Post>) -> Result<(), Error> {
        let subject = self.authorize(token)?;
        self.blog.delete(id)?;
        log::info!("[quill] {} deleted post {}", subject.email(), id);
        Ok(())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn quill() -> (Quill, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let quill = Quill::with_clock(Config::new("test secret"), clock.clone());
        (quill, clock)
    }

    fn signup(quill: &Quill, email: &str, password: &str) -> String {
        quill
            .register(RegisterRequest {
                email: email.to_string(),
                name: "Ada".to_string(),
                phone: "555-0100".to_string(),
                password: password.to_string(),
            })
            .unwrap();
        quill
            .login(LoginRequest {
                username: email.to_string(),
                password: password.to_string(),
            })
            .unwrap()
            .access_token
    }

    #[test]
    fn login_yields_bearer() {
        let (quill, _) = quill();
        signup(&quill, "a@x.com", "p1");
        let response = quill
            .login(LoginRequest {
                username: "a@x.com".to_string(),
                password: "p1".to_string(),
            })
            .unwrap();
        assert_eq!(response.token_type, "bearer");
        assert!(quill.authorize(&response.access_token).is_ok());
    }

    #[test]
    fn whoami_returns_member() {
        let (quill, _) = quill();
        let token = signup(&quill, "a@x.com", "p1");
        let me = quill.whoami(&token).unwrap();
        assert_eq!(me.email(), "a@x.com");
        assert_eq!(me.name(), "Ada");
    }

    #[test]
    fn protected_calls_need_a_token() {
        let (quill, _) = quill();
        let req = PostRequest::new("t", "d");
        assert_eq!(
            quill.create("nonsense", req.clone()),
            Err(Error::Auth(AuthError::Malformed))
        );
        assert_eq!(
            quill.update("nonsense", ID::from(1), req),
            Err(Error::Auth(AuthError::Malformed))
        );
        assert_eq!(
            quill.delete("nonsense", ID::from(1)),
            Err(Error::Auth(AuthError::Malformed))
        );
        assert!(quill.posts().is_empty());
    }

    #[test]
    fn expired_token_blocks_mutation() {
        let (quill, clock) = quill();
        let token = signup(&quill, "a@x.com", "p1");
        let post = quill.create(&token, PostRequest::new("t", "d")).unwrap();
        clock.advance(Duration::from_secs(30 * 60));
        assert_eq!(
            quill.delete(&token, post.id()),
            Err(Error::Auth(AuthError::Expired))
        );
        assert_eq!(quill.posts(), vec![post]);
    }

    #[test]
    fn auth_checked_before_existence() {
        let (quill, _) = quill();
        assert_eq!(
            quill.delete("nonsense", ID::from(42)),
            Err(Error::Auth(AuthError::Malformed))
        );
    }

    #[test]
    fn errors_classified() {
        assert!(Error::from(AuthError::DuplicateIdentity).is_client_error());
        assert!(Error::from(PostError::NotFound(ID::from(1))).is_client_error());
        assert!(!Error::from(AuthError::Hashing("boom".into())).is_client_error());
        assert!(!Error::from(AuthError::Signing("boom".into())).is_client_error());
    }
}
