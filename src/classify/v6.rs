use super::{UsagePattern, UsageRule};

/// Ordered IPv6 usage rules, evaluated on the canonical lowercase form.
///
/// The prefixes deliberately check the rendered text, not bit ranges:
/// an address only matches when its canonical form spells the prefix
/// out (so e.g. `fd12::1` falls through to the default label, while
/// `fd00::1` is labeled ULA).
pub const IPV6_RULES: &[UsageRule] = &[
    UsageRule {
        pattern: UsagePattern::Prefix("::1"),
        label: "Loopback",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("fe80:"),
        label: "Link-local",
    },
    UsageRule {
        pattern: UsagePattern::OneOf(&["fc00:", "fd00:"]),
        label: "Unique local address (ULA)",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("ff00:"),
        label: "Multicast",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("2001:0:"),
        label: "Teredo tunneling",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("2001:db8:"),
        label: "Documentation",
    },
    UsageRule {
        pattern: UsagePattern::Prefix("2002:"),
        label: "6to4",
    },
    UsageRule {
        pattern: UsagePattern::CatchAll,
        label: "Global unicast",
    },
];
