//! Registration of the built-in helpers under their template names.

use crate::functions::args::Args;
use crate::functions::numbers::DecimalFormat;
use crate::functions::registry::FunctionRegistry;
use crate::functions::{Arity, FunctionError};
use crate::functions::{collections, date, encode, numbers, seq, sql, strings, url};
use crate::query::filter_path;
use crate::types::Value;

/// Register every built-in helper.
pub fn register_builtins(registry: &mut FunctionRegistry) {
    register_path(registry);
    register_dates(registry);
    register_strings(registry);
    register_numbers(registry);
    register_collections(registry);
    register_encoding(registry);
}

/// Check arity and wrap the result.
fn run<T: Into<Value>>(
    args: &Args<'_>,
    arity: Arity,
    f: impl FnOnce() -> Result<T, FunctionError>,
) -> Result<Value, FunctionError> {
    args.expect(arity)?;
    f().map(Into::into)
}

fn register_path(registry: &mut FunctionRegistry) {
    registry.register("filter", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(filter_path(args.value(0), &args.string(1)?))
        })
    });
}

fn register_dates(registry: &mut FunctionRegistry) {
    registry.register("date", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(date::format_date(&args.string(0)?, &args.string(1)?))
        })
    });
    registry.register("dateFrom", |args| {
        run(args, Arity::Exactly(3), || {
            date::format_date_from(&args.string(0)?, &args.string(1)?, &args.string(2)?)
        })
    });
    registry.register("formatUKDate", |args| {
        run(args, Arity::Exactly(1), || Ok(date::format_uk_date(&args.string(0)?)))
    });
    registry.register("datetime", |args| {
        run(args, Arity::Exactly(0), || Ok(date::datetime()))
    });
    registry.register("ukdate", |args| {
        run(args, Arity::Exactly(0), || Ok(date::ukdate()))
    });
    registry.register("ukdatetime", |args| {
        run(args, Arity::Exactly(0), || Ok(date::ukdatetime()))
    });
    registry.register("timeformat", |args| {
        run(args, Arity::Exactly(1), || Ok(date::time_format(&args.string(0)?)))
    });
    registry.register("timeformatminus", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(date::time_format_minus(&args.string(0)?, args.float(1)?))
        })
    });
    registry.register("unixtimestamp", |args| {
        run(args, Arity::Exactly(0), || Ok(date::unix_timestamp()))
    });
    registry.register("nanotimestamp", |args| {
        run(args, Arity::Exactly(0), || Ok(date::nano_timestamp()))
    });
    registry.register("timestamp", |args| {
        run(args, Arity::Exactly(0), || Ok(date::timestamp()))
    });
}

fn register_strings(registry: &mut FunctionRegistry) {
    registry.register("concat", |args| {
        run(args, Arity::AtLeast(0), || Ok(strings::concat(&args.strings_from(0)?)))
    });
    registry.register("replace", |args| {
        run(args, Arity::Exactly(3), || {
            Ok(strings::replace(&args.string(0)?, &args.string(1)?, &args.string(2)?))
        })
    });
    registry.register("reReplaceAll", |args| {
        run(args, Arity::Exactly(3), || {
            strings::re_replace_all(&args.string(0)?, &args.string(1)?, &args.string(2)?)
        })
    });
    registry.register("match", |args| {
        run(args, Arity::Exactly(2), || {
            strings::matches(&args.string(0)?, &args.string(1)?)
        })
    });
    for name in ["lower", "toLower"] {
        registry.register(name, |args| {
            run(args, Arity::Exactly(1), || Ok(args.string(0)?.to_lowercase()))
        });
    }
    for name in ["upper", "toUpper"] {
        registry.register(name, |args| {
            run(args, Arity::Exactly(1), || Ok(args.string(0)?.to_uppercase()))
        });
    }
    registry.register("title", |args| {
        run(args, Arity::Exactly(1), || Ok(strings::title(&args.string(0)?)))
    });
    registry.register("escape", |args| {
        run(args, Arity::Exactly(1), || Ok(strings::escape(&args.string(0)?)))
    });
    registry.register("explode", |args| {
        run(args, Arity::Exactly(2), || {
            let pieces = strings::explode(&args.string(0)?, &args.string(1)?);
            Ok(Value::sequence(pieces))
        })
    });
    registry.register("item", |args| {
        run(args, Arity::Exactly(3), || {
            Ok(strings::item(&args.string(0)?, &args.string(1)?, args.int(2)?))
        })
    });
    registry.register("mapto", |args| {
        run(args, Arity::Exactly(3), || {
            let separators = args.string(2)?;
            let mut chars = separators.chars();
            let pair = chars
                .next()
                .ok_or_else(|| args.invalid("separators must have at least two characters"))?;
            let key = chars.as_str();
            if key.is_empty() {
                return Err(args.invalid("separators must have at least two characters"));
            }
            Ok(strings::mapto(
                &args.string(0)?,
                &args.string(1)?,
                pair.encode_utf8(&mut [0; 4]),
                key,
            ))
        })
    });
    registry.register("ifthen", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(strings::ifthen(args.string(0)?, args.string(1)?))
        })
    });
    registry.register("elseifthen", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(strings::elseifthen(args.string(0)?, args.string(1)?))
        })
    });
    registry.register("url_path", |args| {
        run(args, Arity::Exactly(1), || Ok(strings::url_path(&args.string(0)?)))
    });
    for name in ["sanitise", "sanitize"] {
        registry.register(name, |args| {
            run(args, Arity::Exactly(1), || Ok(strings::sanitise(&args.string(0)?)))
        });
    }
    registry.register("limit", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(strings::limit(args.value(0), width(args, 1)?))
        })
    });
    registry.register("fixlen", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(strings::fixlen(width(args, 0)?, args.value(1)))
        })
    });
    registry.register("fixlenr", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(strings::fixlenr(width(args, 0)?, args.value(1)))
        })
    });
    registry.register("empty", |args| {
        run(args, Arity::Exactly(1), || Ok(strings::empty(args.value(0))))
    });
}

/// A non-negative column count.
fn width(args: &Args<'_>, index: usize) -> Result<usize, FunctionError> {
    let n = args.int(index)?;
    usize::try_from(n).map_err(|_| args.invalid(format!("length must not be negative, got {n}")))
}

fn register_numbers(registry: &mut FunctionRegistry) {
    registry.register("add", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(numbers::add(args.number(0)?, args.number(1)?))
        })
    });
    registry.register("sub", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(numbers::sub(args.number(0)?, args.number(1)?))
        })
    });
    registry.register("mul", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(numbers::mul(args.number(0)?, args.number(1)?))
        })
    });
    registry.register("div", |args| {
        run(args, Arity::Exactly(2), || {
            numbers::div(args.number(0)?, args.number(1)?)
        })
    });
    registry.register("int", |args| {
        run(args, Arity::Exactly(1), || Ok(numbers::to_int(&args.string(0)?)))
    });
    registry.register("float", |args| {
        run(args, Arity::Exactly(1), || {
            let s = args.string(0)?;
            numbers::to_float(&s).ok_or_else(|| args.invalid(format!("'{s}' is not a number")))
        })
    });
    registry.register("decimal", |args| {
        run(args, Arity::Exactly(2), || {
            let spec = args.string(0)?;
            let format = DecimalFormat::parse(&spec)
                .ok_or_else(|| args.invalid(format!("format must be 'width,precision', got '{spec}'")))?;
            Ok(numbers::decimal(format, args.float(1).unwrap_or_default()))
        })
    });
    registry.register("toAbs", |args| {
        run(args, Arity::Exactly(1), || Ok(numbers::to_abs(args.float(0)?)))
    });
    registry.register("sql", |args| {
        run(args, Arity::Exactly(1), || sql::sql_escape(args.value(0)))
    });
    registry.register("urlencode", |args| {
        run(args, Arity::Exactly(1), || Ok(url::urlencode(&args.string(0)?)))
    });
    registry.register("urldecode", |args| {
        run(args, Arity::Exactly(1), || url::urldecode(&args.string(0)?))
    });
}

fn register_collections(registry: &mut FunctionRegistry) {
    registry.register("createMap", |args| {
        run(args, Arity::Exactly(0), || Ok(collections::create_map()))
    });
    registry.register("setItem", |args| {
        run(args, Arity::Exactly(3), || {
            collections::set_item(args.value(0), &args.string(1)?, args.value(2).clone())
                .ok_or_else(|| args.invalid("argument 1 must be a mapping"))
        })
    });
    registry.register("mkSlice", |args| {
        run(args, Arity::AtLeast(0), || Ok(collections::mk_slice(args.values())))
    });
    registry.register("unique", |args| {
        run(args, Arity::Exactly(1), || Ok(collections::unique(args.sequence(0)?)))
    });
    registry.register("in_array", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(collections::in_array(args.value(0), args.value(1)))
        })
    });
    registry.register("isset", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(collections::isset(args.value(0), args.value(1)))
        })
    });
    registry.register("last", |args| {
        run(args, Arity::Exactly(2), || {
            Ok(collections::last(args.int(0)?, args.value(1)))
        })
    });
    registry.register("seq", |args| {
        run(args, Arity::Between(1, 3), || {
            let bounds: Result<Vec<i64>, _> = (0..args.len()).map(|i| args.int(i)).collect();
            Ok(Value::sequence(bounds.map(|b| seq::seq(&b)).unwrap_or_default()))
        })
    });
}

fn register_encoding(registry: &mut FunctionRegistry) {
    for name in ["json_decode", "tojson"] {
        registry.register(name, |args| {
            run(args, Arity::Exactly(1), || encode::json_decode(&args.string(0)?))
        });
    }
    registry.register("json_encode", |args| {
        run(args, Arity::Exactly(1), || encode::json_encode(args.value(0)))
    });
    registry.register("json_escape", |args| {
        run(args, Arity::Exactly(1), || encode::json_escape(args.value(0)))
    });
    registry.register("json", |args| {
        run(args, Arity::Exactly(1), || encode::json_pretty(args.value(0)))
    });
    registry.register("xml_decode", |args| {
        run(args, Arity::Exactly(1), || encode::xml_decode(&args.string(0)?))
    });
    registry.register("xml_encode", |args| {
        run(args, Arity::Exactly(1), || Ok(encode::xml_encode(args.mapping(0)?)))
    });
    registry.register("xml_array", |args| {
        run(args, Arity::Exactly(3), || {
            Ok(encode::xml_array(
                args.sequence(0)?,
                &args.string(1)?,
                &args.string(2)?,
            ))
        })
    });
    registry.register("md5", |args| {
        run(args, Arity::Exactly(1), || encode::md5(args.value(0)))
    });
}
