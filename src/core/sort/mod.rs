use crate::core::list::{HEAD, List, NIL};

/// Sort `list` in ascending order. Equal values keep their relative order.
pub(crate) fn sort<T: Ord>(list: &mut List<T>) {
    let (Some(first), Some(last)) = (list.first(), list.last()) else {
        return;
    };
    if first == last {
        return;
    }

    list.set_next(last, NIL);
    let sorted = merge_sort(list, first);

    let mut prev = HEAD;
    let mut cursor = sorted;
    while cursor != NIL {
        list.set_prev(cursor, prev);
        list.set_next(prev, cursor);
        prev = cursor;
        cursor = list.next(cursor);
    }
    list.set_next(prev, HEAD);
    list.set_prev(HEAD, prev);
}

fn merge_sort<T: Ord>(list: &mut List<T>, head: usize) -> usize {
    if head == NIL || list.next(head) == NIL {
        return head;
    }

    // slow stops on the last node of the left half
    let mut slow = head;
    let mut fast = list.next(head);
    while fast != NIL && list.next(fast) != NIL {
        fast = list.next(list.next(fast));
        slow = list.next(slow);
    }
    let right = list.next(slow);
    list.set_next(slow, NIL);

    let left = merge_sort(list, head);
    let right = merge_sort(list, right);
    merge(list, left, right)
}

fn merge<T: Ord>(list: &mut List<T>, mut left: usize, mut right: usize) -> usize {
    let mut head = NIL;
    let mut tail = NIL;
    while left != NIL && right != NIL {
        // ties take from the left run
        let node = if list.value(right) < list.value(left) {
            let node = right;
            right = list.next(right);
            node
        } else {
            let node = left;
            left = list.next(left);
            node
        };
        if tail == NIL {
            head = node;
        } else {
            list.set_next(tail, node);
        }
        tail = node;
    }

    let rest = if left != NIL { left } else { right };
    if tail == NIL {
        return rest;
    }
    list.set_next(tail, rest);
    head
}
