#![deny(warnings)]

// Buffered cursor over any iterator. Items are pulled from the source lazily
// and kept until `ignore`/`extract` drops everything up to the cursor.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.fill_to_pos();
        let end = self.buf.len() as isize;
        if self.pos > end {
            self.pos = end;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1 }
    }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > self.buf.len() as isize {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    fn fill_to_pos(&mut self) {
        while self.pos >= self.buf.len() as isize {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    // everything consumed since the last ignore/extract
    pub fn view(&self) -> &[I::Item] {
        let n = (self.pos + 1).min(self.buf.len() as isize).max(0) as usize;
        &self.buf[..n]
    }

    pub fn ignore(&mut self) {
        let n = self.view().len();
        self.buf = self.buf.split_off(n);
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }

    // Advance only if the next item satisfies 'pred'
    pub fn accept_if(&mut self, pred: impl Fn(&I::Item) -> bool) -> Option<I::Item> {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if pred(&next) { return Some(next); }
        }
        self.set_pos(backtrack);
        None
    }

    // Skip items satisfying 'pred', returns whether the scanner advanced
    pub fn skip_while(&mut self, pred: impl Fn(&I::Item) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }

    // Advance until an item satisfying 'pred' or EOF, returns whether it moved
    pub fn until(&mut self, pred: impl Fn(&I::Item) -> bool) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if pred(&next) { break; }
            self.next();
            advanced = true;
        }
        advanced
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    // Advance only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        self.accept_if(|item| any.contains(item))
    }

    // Skip over the 'over' set, returns whether the scanner advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        self.skip_while(|item| over.contains(item))
    }

    // Advance until an item in the 'any' set or EOF, returns whether it moved
    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        self.until(|item| any.contains(item))
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // drop any leading whitespace, returns whether some was found
    pub fn skip_ws(&mut self) -> bool {
        let skipped = self.skip_while(|c| c.is_whitespace());
        self.ignore();
        skipped
    }

    // next run of non-whitespace chars
    pub fn scan_word(&mut self) -> Option<String> {
        self.skip_ws();
        if self.until(|c| c.is_whitespace()) {
            Some(self.extract_string())
        } else {
            None
        }
    }

    // true if the whole remaining input belongs to the 'only' set
    pub fn consists_of(&mut self, only: &[char]) -> bool {
        self.skip_all(only) && self.peek().is_none()
    }
}
