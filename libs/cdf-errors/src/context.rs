//! Where the mapper learns the path of the current request.

/// Exposes the path of the request being handled, if there is one.
pub trait RequestContext {
    /// Path of the current request. Empty paths are reported as `None`.
    fn current_path(&self) -> Option<&str>;
}

/// Context for code that runs outside any request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRequest;

impl RequestContext for NoRequest {
    fn current_path(&self) -> Option<&str> {
        None
    }
}

impl RequestContext for str {
    fn current_path(&self) -> Option<&str> {
        Some(self).filter(|path| !path.is_empty())
    }
}

impl RequestContext for String {
    fn current_path(&self) -> Option<&str> {
        self.as_str().current_path()
    }
}

impl<T: RequestContext + ?Sized> RequestContext for &T {
    fn current_path(&self) -> Option<&str> {
        (**self).current_path()
    }
}

impl<T: RequestContext> RequestContext for Option<T> {
    fn current_path(&self) -> Option<&str> {
        self.as_ref().and_then(RequestContext::current_path)
    }
}

impl RequestContext for http::Uri {
    fn current_path(&self) -> Option<&str> {
        self.path().current_path()
    }
}

impl<B> RequestContext for http::Request<B> {
    fn current_path(&self) -> Option<&str> {
        self.uri().current_path()
    }
}
