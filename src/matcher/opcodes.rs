use super::types::{Group, Match, Opcode, Tag};

/// Turns a sentinel-terminated block list into opcodes partitioning both sequences.
pub(crate) fn opcodes(blocks: &[Match]) -> Vec<Opcode> {
    let (mut i, mut j) = (0, 0);
    let mut codes = Vec::with_capacity(blocks.len() * 2);
    for m in blocks {
        let tag = match (i < m.a, j < m.b) {
            (true, true) => Some(Tag::Replace),
            (true, false) => Some(Tag::Delete),
            (false, true) => Some(Tag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            codes.push(Opcode::new(tag, i, m.a, j, m.b));
        }
        if m.size > 0 {
            codes.push(Opcode::new(Tag::Equal, m.a, m.a_end(), m.b, m.b_end()));
        }
        i = m.a_end();
        j = m.b_end();
    }
    codes
}

/// Splits opcodes into groups carrying at most `context` equal elements on
/// each side of a change.
///
/// `codes` must partition both sequences, so the first opcode starts at
/// `(0, 0)`; a leading equal run is trimmed to its last `context` elements
/// and a trailing one to its first `context`. Without any change, the single
/// trimmed equal run forms the only group, unless trimming left nothing.
pub(crate) fn group(codes: &[Opcode], context: usize) -> Vec<Group> {
    debug_assert!(codes.first().map_or(true, |op| op.i1 == 0 && op.j1 == 0));
    let mut codes = codes.to_vec();
    if let Some(first) = codes.first_mut().filter(|op| op.is_equal()) {
        first.i1 = first.i1.max(first.i2.saturating_sub(context));
        first.j1 = first.j1.max(first.j2.saturating_sub(context));
    }
    if let Some(last) = codes.last_mut().filter(|op| op.is_equal()) {
        last.i2 = last.i2.min(last.i1 + context);
        last.j2 = last.j2.min(last.j1 + context);
    }

    let mut groups = Vec::new();
    let mut current: Group = Vec::new();
    for mut op in codes {
        if op.is_equal() && op.a_len() > 2 * context {
            let head = Opcode::new(
                Tag::Equal,
                op.i1,
                op.i1 + context,
                op.j1,
                op.j1 + context,
            );
            push(&mut current, head);
            close(&mut groups, std::mem::take(&mut current));
            op.i1 = op.i2 - context;
            op.j1 = op.j2 - context;
        }
        push(&mut current, op);
    }
    close(&mut groups, current);
    groups
}

fn push(group: &mut Group, op: Opcode) {
    if op.is_equal() && op.a_len() == 0 {
        return;
    }
    group.push(op);
}

fn close(groups: &mut Vec<Group>, group: Group) {
    if !group.is_empty() {
        groups.push(group);
    }
}
