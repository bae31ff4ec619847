use crate::color::Painted;
use crate::{Context, LogSink, SuspendError, TokenGroup};
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;
use std::sync::Arc;

/// Implements the [`Payload`] attached to an activation.
pub mod payload;
use self::payload::Payload;

/// Per-call options for constructing an [`Activation`].
///
/// The defaults describe a plain logging call: advance the generator of the
/// unnamed group, print the token, watch for nothing.
#[derive(Clone)]
pub struct Options<'a> {
    watch: Option<String>,
    advance: bool,
    nowatch_log: Option<bool>,
    print_word: bool,
    group: String,
    logger: Option<Arc<dyn LogSink>>,
    data: Payload<'a>,
}

impl<'a> Options<'a> {
    /// Sets the token to match the produced token against.
    pub fn watch(mut self, watch: impl Into<String>) -> Self {
        self.watch = Some(watch.into());

        self
    }

    /// Chooses whether to draw a new token (`true`) or to look at the last
    /// drawn one (`false`).
    pub fn advance(mut self, advance: bool) -> Self {
        self.advance = advance;

        self
    }

    /// Chooses whether the activation is active when no watch token is set.
    /// Defaults to the context's [config](crate::WatchwordConfig::nowatch_log).
    pub fn nowatch_log(mut self, nowatch_log: bool) -> Self {
        self.nowatch_log = Some(nowatch_log);

        self
    }

    /// Chooses whether constructing the activation prints the token.
    pub fn print_word(mut self, print_word: bool) -> Self {
        self.print_word = print_word;

        self
    }

    /// Sets the name of the group to draw from.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();

        self
    }

    /// Overrides the context's default sink for this call.
    pub fn logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = Some(logger);

        self
    }

    /// Attaches the given payload.
    pub fn data(mut self, data: Payload<'a>) -> Self {
        self.data = data;

        self
    }
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self {
            watch: None,
            advance: true,
            nowatch_log: None,
            print_word: true,
            group: String::new(),
            logger: None,
            data: Payload::Empty,
        }
    }
}

impl Debug for Options<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("watch", &self.watch)
            .field("advance", &self.advance)
            .field("nowatch_log", &self.nowatch_log)
            .field("print_word", &self.print_word)
            .field("group", &self.group)
            .field("logger", &self.logger.is_some())
            .field("data", &self.data)
            .finish()
    }
}

/// One resolved decision for a single call site invocation.
///
/// On construction, the activation either draws a new token from its group
/// or peeks at the last one, then compares it with the watch token:
///
/// - it **matches** when a watch token is set and equals the produced token
///   (exact, case-sensitive comparison),
/// - it is **active** when it matches, or when no watch token is set and
///   `nowatch_log` is enabled.
///
/// Unless `print_word` is disabled, construction also logs the activation,
/// unconditionally if no watch token is set, and only when active otherwise.
///
/// The activation is immutable once constructed.
pub struct Activation<'a> {
    context: &'a Context,
    group: Arc<TokenGroup>,
    watch: Option<String>,
    token: Option<String>,
    matched: bool,
    active: bool,
    logger: Option<Arc<dyn LogSink>>,
    payload: Payload<'a>,
}

impl<'a> Activation<'a> {
    /// Resolves an activation in the given context.
    pub fn new(context: &'a Context, options: Options<'a>) -> Self {
        let Options {
            watch,
            advance,
            nowatch_log,
            print_word,
            group,
            logger,
            data,
        } = options;

        let group = context.group(&group);
        let token = if advance {
            Some(group.draw())
        } else {
            group.peek()
        };

        let matched = matches!((&watch, &token), (Some(watch), Some(token)) if watch == token);
        let nowatch_log = nowatch_log.unwrap_or_else(|| context.config().nowatch_log());
        let active = matched || (nowatch_log && watch.is_none());

        let activation = Self {
            context,
            group,
            watch,
            token,
            matched,
            active,
            logger,
            payload: data,
        };

        if print_word {
            activation.log(activation.watch.is_none());
        }

        activation
    }

    /// Passes this activation and its payload to the sink if `force` is set or
    /// this activation is active. Reports whether anything was logged.
    pub fn log(&self, force: bool) -> bool {
        if !force && !self.active {
            return false;
        }

        let sink = match &self.logger {
            Some(logger) => Arc::clone(logger),
            None => self.context.default_sink(),
        };

        sink.log(self, self.payload.as_slice());

        true
    }

    /// Returns a view of this activation that displays with ANSI colors.
    pub fn painted(&self) -> Painted<'_, 'a> {
        Painted(self)
    }
}

impl<'a> Activation<'a> {
    /// Exposes the group this activation drew from.
    pub fn group(&self) -> &TokenGroup {
        &self.group
    }

    /// Reports the watch token, if any.
    pub fn watch(&self) -> Option<&str> {
        self.watch.as_deref()
    }

    /// Reports the produced token. Only [`None`] when peeking at a group that
    /// has not drawn anything yet.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Reports whether the watch token equals the produced token.
    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// Reports whether this activation is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Exposes the attached payload.
    pub fn payload(&self) -> &Payload<'a> {
        &self.payload
    }

    /// Exposes the context this activation was resolved in.
    pub fn context(&self) -> &'a Context {
        self.context
    }
}

impl Display for Activation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let token = self.token.as_deref().unwrap_or("-");

        match self.group.name() {
            "" => write!(f, "⏎ {}", token),
            name => write!(f, "⏎ {}:{}", name, token),
        }
    }
}

impl Debug for Activation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Activation")
            .field("group", &self.group.name())
            .field("watch", &self.watch)
            .field("token", &self.token)
            .field("matched", &self.matched)
            .field("active", &self.active)
            .field("payload", &self.payload)
            .finish()
    }
}

/// A watch-only [`Activation`]: peeks at the last drawn token instead of
/// drawing a new one, prints nothing on construction, and can
/// [break](Watch::breakpoint).
#[derive(Debug)]
pub struct Watch<'a> {
    activation: Activation<'a>,
}

impl<'a> Watch<'a> {
    /// Resolves a watch-only activation in the given context.
    ///
    /// The watch token is `word` or, if absent, the value of the configured
    /// environment variable. Either is parsed as a
    /// [`WatchTarget`](crate::WatchTarget): a group named there replaces the
    /// group in `options`. Any watch token set in `options` is ignored; the
    /// `advance` and `print_word` options are forced off.
    pub fn after(context: &'a Context, word: Option<&str>, options: Options<'a>) -> Self {
        let target = match word {
            Some(word) => Some(crate::WatchTarget::parse(word, context.config().separator())),
            None => context.watch_target(),
        };

        let mut options = options.advance(false).print_word(false);
        options.watch = None;

        if let Some(target) = target {
            let (group, token) = target.into_parts();

            if let Some(group) = group {
                options = options.group(group);
            }

            options = options.watch(token);
        }

        Self {
            activation: Activation::new(context, options),
        }
    }

    /// Hands control to the context's [suspend hook](crate::SuspendHook) if
    /// this activation is active, otherwise does nothing.
    ///
    /// Reports whether the hook was invoked.
    pub fn breakpoint(&self) -> Result<bool, SuspendError> {
        if !self.activation.is_active() {
            return Ok(false);
        }

        let hook = self.activation.context().suspend_hook();
        hook.suspend(&self.activation)?;

        Ok(true)
    }

    /// Unwraps the underlying activation.
    pub fn into_inner(self) -> Activation<'a> {
        self.activation
    }
}

impl<'a> Deref for Watch<'a> {
    type Target = Activation<'a>;

    fn deref(&self) -> &Self::Target {
        &self.activation
    }
}

impl Display for Watch<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.activation, f)
    }
}
