//! Call contexts for tracebacks.
//!
//! Every function call runs in a `CallContext` whose parent is the caller's
//! context and whose entry is the call site. Walking that chain from the
//! error site outward yields the traceback. The chain also carries the call
//! depth, which is checked when a child is created so that runaway
//! recursion becomes a runtime error instead of a host stack overflow.

use std::rc::Rc;

use basic_diagnostic::TraceFrame;
use basic_ir::{SharedSource, Span};

use crate::errors::{recursion_limit_exceeded, EvalError};

/// Display name of the outermost context.
pub const PROGRAM_CONTEXT: &str = "<program>";

/// Default maximum number of nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Where control entered a context from: the call site in the parent.
#[derive(Clone, Debug)]
struct Entry {
    source: SharedSource,
    span: Span,
}

/// One link in the call chain.
#[derive(Debug)]
pub struct CallContext {
    display_name: String,
    parent: Option<Rc<CallContext>>,
    entry: Option<Entry>,
    depth: usize,
}

impl CallContext {
    /// The context a program starts in.
    pub fn root(display_name: impl Into<String>) -> Rc<Self> {
        Rc::new(CallContext {
            display_name: display_name.into(),
            parent: None,
            entry: None,
            depth: 0,
        })
    }

    /// Context for a call made at `span` in `source`.
    ///
    /// Returns `RecursionLimit` when the new depth would exceed `max_depth`.
    pub fn child(
        self: &Rc<Self>,
        display_name: impl Into<String>,
        source: SharedSource,
        span: Span,
        max_depth: usize,
    ) -> Result<Rc<Self>, EvalError> {
        let depth = self.next_depth(max_depth)?;
        Ok(Rc::new(CallContext {
            display_name: display_name.into(),
            parent: Some(Rc::clone(self)),
            entry: Some(Entry { source, span }),
            depth,
        }))
    }

    /// A new outermost context that still counts toward this one's depth.
    ///
    /// Used for scripts started from a running program: their tracebacks
    /// start fresh, but a script that keeps running itself still hits the
    /// depth limit.
    pub fn detached(
        &self,
        display_name: impl Into<String>,
        max_depth: usize,
    ) -> Result<Rc<Self>, EvalError> {
        let depth = self.next_depth(max_depth)?;
        Ok(Rc::new(CallContext {
            display_name: display_name.into(),
            parent: None,
            entry: None,
            depth,
        }))
    }

    fn next_depth(&self, max_depth: usize) -> Result<usize, EvalError> {
        let depth = self.depth.saturating_add(1);
        if depth > max_depth {
            tracing::debug!(depth, max_depth, "call depth limit reached");
            return Err(recursion_limit_exceeded());
        }
        Ok(depth)
    }

    /// Frames from the outermost context down to this one, where execution
    /// in this context is at `span` of `source`.
    pub fn traceback(&self, source: &SharedSource, span: Span) -> Vec<TraceFrame> {
        let mut frames = Vec::new();
        let mut position = Some((source.clone(), span));
        let mut context = Some(self);

        while let (Some(ctx), Some((source, span))) = (context, position) {
            frames.push(TraceFrame {
                display_name: ctx.display_name.clone(),
                source,
                span,
            });
            position = ctx.entry.as_ref().map(|e| (e.source.clone(), e.span));
            context = ctx.parent.as_deref();
        }

        frames.reverse();
        frames
    }
}
