//! Well-known framework namespaces and the type names they export.
//!
//! The semantic model cannot see into compiled .NET assemblies, so the most
//! common BCL namespaces are tabled here: enough to recognize that a file
//! mentioning `Console` depends on `using System;`, or that `.Where(...)`
//! depends on `using System.Linq;`. The table lists the types and extension
//! methods people actually write; a namespace missing from it simply falls
//! back to the lexical check, which keeps the classifier conservative.

/// Commonly referenced type and extension-method names per BCL namespace.
static FRAMEWORK_NAMESPACES: &[(&str, &[&str])] = &[
    (
        "System",
        &[
            "Console", "String", "Object", "Exception", "ArgumentException",
            "ArgumentNullException", "InvalidOperationException", "NotImplementedException",
            "NotSupportedException", "FormatException", "DateTime", "DateTimeOffset",
            "TimeSpan", "Guid", "Math", "Convert", "Random", "Uri", "Environment",
            "Activator", "Lazy", "Func", "Action", "Predicate", "Tuple", "IDisposable",
            "IComparable", "IEquatable", "EventArgs", "EventHandler", "Nullable",
            "StringComparison", "StringSplitOptions", "GC", "Type", "Attribute",
            "ObsoleteAttribute", "FlagsAttribute", "Span", "ReadOnlySpan", "Memory",
        ],
    ),
    (
        "System.Collections.Generic",
        &[
            "List", "Dictionary", "HashSet", "SortedSet", "SortedDictionary", "Queue",
            "Stack", "LinkedList", "KeyValuePair", "IEnumerable", "IEnumerator",
            "ICollection", "IList", "IDictionary", "ISet", "IReadOnlyList",
            "IReadOnlyCollection", "IReadOnlyDictionary", "Comparer", "EqualityComparer",
        ],
    ),
    (
        "System.Linq",
        &[
            "Enumerable", "Queryable", "IGrouping", "ILookup", "IOrderedEnumerable",
            // Extension methods show up as plain identifiers at call sites.
            "Select", "SelectMany", "Where", "First", "FirstOrDefault", "Single",
            "SingleOrDefault", "Last", "LastOrDefault", "Any", "All", "Count",
            "ToList", "ToArray", "ToDictionary", "ToHashSet", "OrderBy",
            "OrderByDescending", "ThenBy", "GroupBy", "Distinct", "Concat", "Zip",
            "Skip", "Take", "Sum", "Min", "Max", "Average", "Aggregate", "Reverse",
        ],
    ),
    (
        "System.Text",
        &["StringBuilder", "Encoding", "Rune", "StringRuneEnumerator"],
    ),
    (
        "System.Text.Json",
        &["JsonSerializer", "JsonDocument", "JsonElement", "JsonSerializerOptions"],
    ),
    (
        "System.Text.RegularExpressions",
        &["Regex", "Match", "MatchCollection", "Group", "Capture", "RegexOptions"],
    ),
    (
        "System.IO",
        &[
            "File", "Directory", "Path", "Stream", "FileStream", "MemoryStream",
            "StreamReader", "StreamWriter", "TextReader", "TextWriter", "FileInfo",
            "DirectoryInfo", "FileMode", "FileAccess", "IOException",
            "FileNotFoundException", "DirectoryNotFoundException", "SearchOption",
        ],
    ),
    (
        "System.Threading",
        &[
            "Thread", "Monitor", "Mutex", "Interlocked", "CancellationToken",
            "CancellationTokenSource", "SemaphoreSlim", "ManualResetEventSlim",
        ],
    ),
    (
        "System.Threading.Tasks",
        &["Task", "ValueTask", "TaskCompletionSource", "Parallel", "TaskScheduler"],
    ),
    (
        "System.Net.Http",
        &[
            "HttpClient", "HttpRequestMessage", "HttpResponseMessage", "HttpContent",
            "StringContent", "HttpMethod", "HttpRequestException",
        ],
    ),
    (
        "System.Diagnostics",
        &["Debug", "Trace", "Stopwatch", "Process", "ProcessStartInfo", "Activity"],
    ),
    (
        "System.Globalization",
        &["CultureInfo", "NumberStyles", "DateTimeStyles", "CompareInfo"],
    ),
    (
        "System.Reflection",
        &["Assembly", "MethodInfo", "PropertyInfo", "FieldInfo", "BindingFlags"],
    ),
    (
        "System.ComponentModel",
        &["INotifyPropertyChanged", "PropertyChangedEventArgs", "BackgroundWorker"],
    ),
];

/// Types known to belong to `namespace`, or `None` for namespaces outside
/// the table.
pub fn namespace_types(namespace: &str) -> Option<&'static [&'static str]> {
    FRAMEWORK_NAMESPACES
        .iter()
        .find(|(ns, _)| *ns == namespace)
        .map(|(_, types)| *types)
}
