use crate::record::Record;

/// Stable handle to a node of a [`RankedSequence`].
///
/// Handles are indices into the sequence's arena. Nodes are never removed, so a
/// handle stays valid for as long as the sequence lives.
pub type NodeId = usize;

#[derive(Debug)]
struct Node {
    record: Record,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A growing collection of records kept in descending order of magnitude.
///
/// Records live in an arena and are chained through predecessor and successor
/// handles, so splicing a record in once its position is known is O(1). Finding
/// the position walks from the head, making each insertion O(n) in the worst case.
/// Records with equal magnitude may appear in either relative order.
///
/// # Examples
///
/// ```
/// # use ferris_dusort::ranked::RankedSequence;
/// # use ferris_dusort::record::Record;
/// let mut sequence = RankedSequence::new();
///
/// for (size, name) in [("4.0K", "a"), ("1.0M", "b"), ("512", "c")] {
///     let (record, _) = Record::from_fields(size, name);
///     sequence.insert(record);
/// }
///
/// let names: Vec<&str> = sequence.iter().map(|r| r.label.as_str()).collect();
/// assert_eq!(names, ["b", "a", "c"]);
/// ```
#[derive(Debug, Default)]
pub struct RankedSequence {
    nodes: Vec<Node>,
    head: Option<NodeId>,
}

impl RankedSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handle of the record with the largest magnitude, `None` while empty.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn get(&self, id: NodeId) -> Option<&Record> {
        self.nodes.get(id).map(|node| &node.record)
    }

    /// Inserts a record, starting the search at the head, and returns the new head.
    pub fn insert(&mut self, record: Record) -> NodeId {
        self.insert_from(self.head, record)
    }

    /// Inserts a record, starting the search at `start`, and returns the new head.
    ///
    /// `start` may be any node of the sequence. The search first moves back over
    /// predecessors whose magnitude does not exceed the new record's, then walks
    /// forward and splices the record in just before the first node it is not
    /// strictly smaller than. If no such node exists the record becomes the tail.
    /// The resulting order is the same as inserting from the head.
    ///
    /// A `start` of `None`, or a handle that does not belong to this sequence,
    /// falls back to the head. Inserting into an empty sequence makes the record
    /// the sole node.
    pub fn insert_from(&mut self, start: Option<NodeId>, record: Record) -> NodeId {
        let magnitude = record.magnitude;
        let id = self.nodes.len();
        self.nodes.push(Node {
            record,
            prev: None,
            next: None,
        });

        let start = start.filter(|&s| s < id).or(self.head);
        let Some(mut cur) = start else {
            self.head = Some(id);
            return id;
        };

        while let Some(prev) = self.nodes[cur].prev {
            if self.nodes[prev].record.magnitude > magnitude {
                break;
            }
            cur = prev;
        }

        loop {
            if self.nodes[cur].record.magnitude <= magnitude {
                self.link_before(cur, id);
                break;
            }
            match self.nodes[cur].next {
                Some(next) => cur = next,
                None => {
                    self.link_after(cur, id);
                    break;
                }
            }
        }

        let head = self.first_from(id);
        self.head = Some(head);
        head
    }

    /// Walks predecessor links from `id` back to the node that has none.
    pub fn first_from(&self, id: NodeId) -> NodeId {
        let mut cur = id;
        while let Some(prev) = self.nodes[cur].prev {
            cur = prev;
        }
        cur
    }

    fn link_before(&mut self, at: NodeId, id: NodeId) {
        let prev = self.nodes[at].prev;
        if let Some(prev) = prev {
            self.nodes[prev].next = Some(id);
        }
        self.nodes[id].prev = prev;
        self.nodes[id].next = Some(at);
        self.nodes[at].prev = Some(id);
    }

    fn link_after(&mut self, at: NodeId, id: NodeId) {
        self.nodes[at].next = Some(id);
        self.nodes[id].prev = Some(at);
    }

    /// Traverses the records from the largest magnitude to the smallest.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            sequence: self,
            cur: self.head,
        }
    }

    /// Collects the records in display order. Empty for an empty sequence.
    pub fn to_ordered_list(&self) -> Vec<&Record> {
        self.iter().collect()
    }

    /// Checks the chain is a single acyclic run covering every node, with
    /// matching predecessor and successor links.
    #[cfg(test)]
    pub(crate) fn check_links(&self) -> Result<(), String> {
        let heads = self.nodes.iter().filter(|n| n.prev.is_none()).count();
        let tails = self.nodes.iter().filter(|n| n.next.is_none()).count();
        if !self.nodes.is_empty() && (heads != 1 || tails != 1) {
            return Err(format!("{} heads and {} tails", heads, tails));
        }

        let mut seen = 0;
        let mut prev = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            if seen > self.nodes.len() {
                return Err("cycle in successor links".to_string());
            }
            if self.nodes[id].prev != prev {
                return Err(format!("node {} has a stale predecessor", id));
            }
            seen += 1;
            prev = Some(id);
            cur = self.nodes[id].next;
        }

        if seen != self.nodes.len() {
            return Err(format!("reached {} of {} nodes", seen, self.nodes.len()));
        }
        Ok(())
    }
}

/// Iterator over a [`RankedSequence`] in descending order of magnitude.
pub struct Iter<'a> {
    sequence: &'a RankedSequence,
    cur: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.sequence.nodes[self.cur?];
        self.cur = node.next;
        Some(&node.record)
    }
}

impl<'a> IntoIterator for &'a RankedSequence {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
