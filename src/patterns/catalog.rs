// SPDX-License-Identifier: MPL-2.0
//! Fixed catalog of design-pattern write-ups.
//!
//! Ids are unique and dense (`1..=N` in catalog order); that density is the
//! only structural invariant. All copy is fixed English content, deliberately
//! outside the localization layer.

/// One pattern write-up shown by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRecord {
    /// Unique, stable id. Dense over the catalog: `1..=N`.
    pub id: u32,
    pub name: &'static str,
    /// Compact label used in the sidebar.
    pub short_name: &'static str,
    /// Decorative emoji shown next to the name.
    pub icon: &'static str,
    /// One-liner shown under the title.
    pub summary: &'static str,
    pub long_description: &'static str,
    /// Multi-line listing rendered in the collapsible code section.
    pub sample_code: &'static str,
    pub usage_notes: &'static str,
}

/// Every pattern in display order.
pub const CATALOG: [PatternRecord; 8] = [
    PatternRecord {
        id: 1,
        name: "Builder",
        short_name: "Builder",
        icon: "🏗️",
        summary: "Assemble a value step by step, validating once at the end.",
        long_description: "A builder collects optional and required inputs through chained \
            methods, then produces the finished value in a single fallible call. The partially \
            configured form never escapes, so the final type can keep its invariants without \
            exposing setters or half-initialized fields.",
        sample_code: r#"#[derive(Default)]
pub struct RequestBuilder {
    url: Option<String>,
    timeout_secs: u64,
}

impl RequestBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<Request, BuildError> {
        let url = self.url.ok_or(BuildError::MissingUrl)?;
        Ok(Request {
            url,
            timeout_secs: self.timeout_secs,
        })
    }
}"#,
        usage_notes: "Reach for a builder when a constructor would need many optional \
            parameters, or when validation spans several fields. For two or three knobs, \
            plain struct literals with Default stay clearer.",
    },
    PatternRecord {
        id: 2,
        name: "Newtype",
        short_name: "Newtype",
        icon: "🎁",
        summary: "Wrap a primitive so the compiler tracks its meaning.",
        long_description: "A single-field tuple struct gives a domain quantity its own type. \
            Mixing up two values that are both plain numbers becomes a compile error, and \
            conversions between units get exactly one audited home in a From impl.",
        sample_code: r#"pub struct Meters(pub f64);
pub struct Feet(pub f64);

impl From<Feet> for Meters {
    fn from(feet: Feet) -> Self {
        Meters(feet.0 * 0.3048)
    }
}

fn descent_rate(altitude: Meters, seconds: f64) -> f64 {
    altitude.0 / seconds
}"#,
        usage_notes: "Use newtypes at API boundaries where raw integers or strings could be \
            swapped silently. The wrapper compiles away, so there is no runtime cost.",
    },
    PatternRecord {
        id: 3,
        name: "Typestate",
        short_name: "Typestate",
        icon: "🚦",
        summary: "Encode a protocol's phases as type parameters.",
        long_description: "Each phase of a stateful protocol becomes its own marker type, and \
            operations are implemented only for the phases where they are legal. Calling send \
            before the handshake is then not a runtime error but a missing method, caught at \
            compile time.",
        sample_code: r#"pub struct Connection<S> {
    stream: TcpStream,
    _state: PhantomData<S>,
}

pub struct Plain;
pub struct Encrypted;

impl Connection<Plain> {
    pub fn upgrade(self) -> io::Result<Connection<Encrypted>> {
        let stream = handshake(self.stream)?;
        Ok(Connection {
            stream,
            _state: PhantomData,
        })
    }
}

impl Connection<Encrypted> {
    pub fn send(&mut self, frame: &[u8]) -> io::Result<()> {
        self.stream.write_all(frame)
    }
}"#,
        usage_notes: "Worth the ceremony for protocols where misordered calls corrupt data or \
            leak secrets. For simple two-phase setup, an Option field checked at runtime is \
            often enough.",
    },
    PatternRecord {
        id: 4,
        name: "RAII Guard",
        short_name: "RAII Guard",
        icon: "🔒",
        summary: "Tie cleanup to scope exit via Drop.",
        long_description: "A guard value acquires a resource in its constructor and releases \
            it in Drop. Whatever path control flow takes out of the scope, including early \
            returns and panics during unwinding, the release runs exactly once.",
        sample_code: r#"pub struct Spinner<'a> {
    term: &'a mut Terminal,
}

impl<'a> Spinner<'a> {
    pub fn start(term: &'a mut Terminal) -> Self {
        term.show_spinner();
        Self { term }
    }
}

impl Drop for Spinner<'_> {
    fn drop(&mut self) {
        self.term.hide_spinner();
    }
}"#,
        usage_notes: "The standard library leans on this everywhere: MutexGuard, File, and \
            Vec are all RAII. Write your own guard whenever a paired do/undo must survive \
            early returns.",
    },
    PatternRecord {
        id: 5,
        name: "Iterator Adapter",
        short_name: "Iterators",
        icon: "🔗",
        summary: "Compose lazy pipelines instead of index loops.",
        long_description: "Adapters such as filter, map, and enumerate build a description of \
            the computation that only runs when a consumer like sum or collect drives it. The \
            pipeline reads in data-flow order and borrows the source sequence without copying \
            it.",
        sample_code: r#"let total: u64 = orders
    .iter()
    .filter(|order| order.paid)
    .map(|order| order.amount_cents)
    .sum();

let labels: Vec<String> = orders
    .iter()
    .enumerate()
    .map(|(i, order)| format!("{}. {}", i + 1, order.customer))
    .collect();"#,
        usage_notes: "Prefer adapters for transform-and-reduce work over collections. Drop \
            back to a for loop when the body needs early exit with side effects or mutates \
            several locals at once.",
    },
    PatternRecord {
        id: 6,
        name: "Interior Mutability",
        short_name: "Interior Mut",
        icon: "🧬",
        summary: "Mutate behind a shared reference, checked at runtime.",
        long_description: "Cell and RefCell move the exclusive-access check from compile time \
            to run time, letting a value mutate through &self. The borrow rules still hold: \
            RefCell panics on overlapping borrows instead of allowing aliased mutation.",
        sample_code: r#"pub struct Metrics {
    hits: Cell<u64>,
    samples: RefCell<Vec<f32>>,
}

impl Metrics {
    pub fn record(&self, sample: f32) {
        self.hits.set(self.hits.get() + 1);
        self.samples.borrow_mut().push(sample);
    }
}"#,
        usage_notes: "Keep the cells private and the borrow scopes tiny. If the value crosses \
            threads, switch to Mutex or RwLock; Cell and RefCell are single-threaded by \
            design.",
    },
    PatternRecord {
        id: 7,
        name: "Strategy",
        short_name: "Strategy",
        icon: "🎯",
        summary: "Swap behavior at runtime through a trait object.",
        long_description: "The varying step of an algorithm is pulled out into a trait, and \
            the host stores Box<dyn Trait>. Callers pick the concrete strategy at construction \
            time; the host's control flow never changes when a new strategy is added.",
        sample_code: r#"pub trait Compressor {
    fn compress(&self, input: &[u8]) -> Vec<u8>;
}

pub struct Archiver {
    compressor: Box<dyn Compressor>,
}

impl Archiver {
    pub fn add(&mut self, entry: &[u8]) {
        let packed = self.compressor.compress(entry);
        self.write_entry(&packed);
    }
}"#,
        usage_notes: "Use a trait object when strategies are chosen at runtime or stored \
            heterogeneously. When the choice is fixed at compile time, a generic parameter \
            gives the same shape without the vtable.",
    },
    PatternRecord {
        id: 8,
        name: "Observer",
        short_name: "Observer",
        icon: "📡",
        summary: "Decouple producers from consumers with channels.",
        long_description: "Instead of callbacks stored in the subject, the producer sends \
            events into a channel and any number of consumers drain their receivers on their \
            own schedule. Ownership stays simple: the event is moved, not shared, and the \
            subject never learns who listens.",
        sample_code: r#"let (events, inbox) = std::sync::mpsc::channel();

std::thread::spawn(move || {
    for event in inbox {
        println!("audit: {event:?}");
    }
});

events.send(Event::LoginFailed { attempts: 3 }).ok();"#,
        usage_notes: "Channels shine when consumers live on other threads or tasks. For \
            same-thread UI wiring, prefer returning events from update functions over \
            callback registries.",
    },
];

/// Look up a record by id.
pub fn find(id: u32) -> Option<&'static PatternRecord> {
    CATALOG.iter().find(|record| record.id == id)
}

/// Catalog position of the record carrying `id`.
pub fn position(id: u32) -> Option<usize> {
    CATALOG.iter().position(|record| record.id == id)
}
