/// Cycles the highlighted logo of a column on a fixed interval
#[derive(Clone, Debug, PartialEq)]
pub struct LogoColumn {
    len: usize,
    index: usize,
    interval_ms: f64,
    elapsed_ms: f64,
}

impl LogoColumn {
    pub fn new(len: usize, interval_ms: f64) -> Self {
        Self {
            len,
            index: 0,
            interval_ms,
            elapsed_ms: 0.0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// New logo list; restarts from the first one
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
        self.elapsed_ms = 0.0;
    }

    /// Returns true when the index moved
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if self.len < 2 || self.interval_ms <= 0.0 {
            return false;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        let mut moved = false;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            self.index = (self.index + 1) % self.len;
            moved = true;
        }
        moved
    }
}
